//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは状態を持たず、リクエストごとに独立して動作する
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `sum`: 2 つの数値の加算

pub mod health;
pub mod sum;

pub use health::health_check;
pub use sum::sum;
