//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。必須の環境変数はなく、
//! 未設定の場合はデフォルト値で起動できる。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// - `API_HOST`: バインドアドレス（デフォルト: `0.0.0.0`）
    /// - `API_PORT`: ポート番号（デフォルト: `8000`）
    ///
    /// `API_PORT` に数値として解釈できない値が設定されている場合は
    /// パニックする（設定ミスのまま起動させない）。
    pub fn from_env() -> Self {
        Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
        }
    }
}
