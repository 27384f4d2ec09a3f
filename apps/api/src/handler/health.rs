//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//!
//! ## 用途
//!
//! - **ロードバランサー**: ALB/NLB のターゲットグループヘルスチェック
//! - **コンテナオーケストレーター**: ECS/Kubernetes の liveness probe
//! - **監視システム**: 外部監視サービスからの死活監視
//!
//! レスポンス型は [`calcflow_shared::HealthResponse`] を参照。

use axum::Json;
use calcflow_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
/// 依存サービスを持たないため、常に 200 OK と `{"status":"ok"}` を返す。
///
/// # 使用例
///
/// ```text
/// $ curl http://localhost:8000/health
/// {"status":"ok"}
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
