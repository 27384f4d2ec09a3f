//! # CalcFlow 共有ユーティリティ
//!
//! このクレートは、CalcFlow
//! プロジェクト全体で使用される共通型とユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ワイヤ型（レスポンス構造体）は純粋なデータ構造として定義する
//! - axum への依存を持たない（`IntoResponse` 変換は API 側の責務）
//! - トレーシング初期化は `observability` フィーチャでオプトイン

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
