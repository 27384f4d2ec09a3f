//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。
//!
//! ## 契約
//!
//! `GET /health` のレスポンスボディは常に `{"status":"ok"}` の固定形状。
//! ロードバランサーや監視システムはこの形状を前提に死活判定を行うため、
//! フィールドの追加・変更は互換性破壊となる。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// サービスの稼働状態を表現する。依存サービスを持たないため、
/// プロセスが応答できる = 稼働中であり、`status` は常に `"ok"` となる。
///
/// ## 使用例
///
/// ```
/// use calcflow_shared::HealthResponse;
///
/// let response = HealthResponse::ok();
/// assert_eq!(response.status, "ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（常に `"ok"`）
    pub status: String,
}

impl HealthResponse {
    /// 稼働中を表すレスポンスを作成する
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
