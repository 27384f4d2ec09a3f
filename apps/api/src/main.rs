//! # CalcFlow API サーバー
//!
//! 加算 API とヘルスチェックを提供する HTTP サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | GET | `/health` | 死活監視用ヘルスチェック |
//! | POST | `/sum` | 2 つの数値の加算 |
//!
//! ハンドラは状態を持たず、リクエスト間で共有されるのはルーター自体のみ。
//! 並行処理は tokio / axum に完全に委譲する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8000` | ポート番号 |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | `info,calcflow=debug` | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p calcflow-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_PORT=8000 LOG_FORMAT=json cargo run -p calcflow-api --release
//! ```

mod config;
mod error;
mod handler;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use calcflow_shared::observability::{self, LogFormat};
use config::ApiConfig;
use handler::{health_check, sum};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    observability::init_tracing(LogFormat::from_env());

    // 設定読み込み（必須の環境変数はない）
    let config = ApiConfig::from_env();

    tracing::info!(
        "API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // ルーター構築
    // TraceLayer により、すべての HTTP リクエストがトレーシングされる
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/sum", post(sum))
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
