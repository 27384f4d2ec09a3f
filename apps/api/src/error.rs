//! # API エラー定義
//!
//! API 層のエラーと、axum レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! - **thiserror**: 型安全なエラー定義（`Display` / `Error` の自動実装）
//! - **IntoResponse 実装**: axum との統合による自動レスポンス変換
//! - エラーボディは全エンドポイント共通の
//!   [`ErrorResponse`](calcflow_shared::ErrorResponse)（`{"detail": "..."}`）
//!
//! ## エラーの流れ
//!
//! ```text
//! Json エクストラクタの拒否 (JsonRejection)
//!        ↓ From 変換
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + JSON)
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calcflow_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
///
/// ハンドラから返されるエラー型。`IntoResponse` を実装しているため、
/// axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストボディを数値の組として解釈できない（400 Bad Request）
    ///
    /// フィールド欠落・数値以外の値・不正な JSON のいずれも、
    /// クライアントには固定メッセージで返す。
    #[error("a and b must be numbers")]
    InvalidOperands,
}

impl From<JsonRejection> for ApiError {
    /// `Json` エクストラクタの拒否を API エラーに変換する
    ///
    /// 拒否理由の詳細はログにのみ出力し、クライアントには返さない。
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("リクエストボディの検証に失敗しました: {}", rejection);
        Self::InvalidOperands
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InvalidOperands => (StatusCode::BAD_REQUEST, "a and b must be numbers"),
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}
