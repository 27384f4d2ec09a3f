//! # エラーレスポンス共通型
//!
//! 全エンドポイント共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API 側の責務（shared に axum 依存を入れない）
//! - ボディは `{"detail": "..."}` の 1 フィールドのみ。HTTP ステータスコードは
//!   レスポンスヘッダが持つため、ボディに重複して含めない

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// クライアントエラーを `{"detail": "..."}` 形式で返すための構造体。
/// `detail` には人間可読なエラー内容を設定する。
///
/// ## 使用例
///
/// ```
/// use calcflow_shared::ErrorResponse;
///
/// let response = ErrorResponse::new("a and b must be numbers");
/// assert_eq!(response.detail, "a and b must be numbers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// エラーの詳細情報
    pub detail: String,
}

impl ErrorResponse {
    /// 新しい `ErrorResponse` を作成する
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
