//! # 加算ハンドラ
//!
//! 2 つの数値を加算するエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! POST /sum
//! {"a": 2, "b": 3}
//! ```
//!
//! ## バリデーション
//!
//! スキーマ検証（必須フィールド・数値型）は `Json` エクストラクタが担う。
//! ハンドラは検証済みの `f64` の組を受け取るだけであり、加算自体は
//! 失敗しない（IEEE 754 の加算は全域関数）。エクストラクタの拒否は
//! [`ApiError::InvalidOperands`] に変換され、
//! 400 `{"detail":"a and b must be numbers"}` としてクライアントに返る。

use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// 加算リクエスト
///
/// `a` / `b` はともに必須。JSON の整数・浮動小数点数のどちらも
/// `f64` として受け付ける。値域の制約はない。
#[derive(Debug, Deserialize)]
pub struct SumRequest {
    pub a: f64,
    pub b: f64,
}

/// 加算レスポンス
#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub result: f64,
}

/// POST /sum
///
/// `a + b` を計算して返す。
///
/// エクストラクタの結果を `Result` で受け取ることで、検証失敗時も
/// axum のデフォルト拒否（text/plain）ではなく、このサービス共通の
/// JSON エラー契約で応答する。
pub async fn sum(
    payload: Result<Json<SumRequest>, JsonRejection>,
) -> Result<Json<SumResponse>, ApiError> {
    let Json(req) = payload?;

    Ok(Json(SumResponse {
        result: req.a + req.b,
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::post,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;

    fn create_test_app() -> Router {
        Router::new().route("/sum", post(sum))
    }

    fn create_request(body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/sum")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    async fn body_to_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    // ===== 成功パス =====

    #[rstest]
    #[case(2.0, 3.0, 5.0)]
    #[case(2.5, 0.5, 3.0)]
    #[case(-1.5, 1.5, 0.0)]
    #[case(0.0, 0.0, 0.0)]
    #[tokio::test]
    async fn test_sum_数値の組の合計を返す(
        #[case] a: f64,
        #[case] b: f64,
        #[case] expected: f64,
    ) {
        // Given
        let sut = create_test_app();
        let body = serde_json::json!({ "a": a, "b": b });

        // When
        let response = sut.oneshot(create_request(&body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_to_json(response).await;
        assert_eq!(json["result"], expected);
    }

    #[tokio::test]
    async fn test_sum_整数リテラルもf64として受け付ける() {
        // Given
        let sut = create_test_app();
        let body = serde_json::json!({ "a": 2, "b": 3 });

        // When
        let response = sut.oneshot(create_request(&body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_to_json(response).await;
        assert_eq!(json["result"], 5.0);
    }

    #[tokio::test]
    async fn test_sum_繰り返し呼び出しても同一のレスポンスを返す() {
        // Given
        let body = serde_json::json!({ "a": 1.25, "b": 2.75 });

        // When
        let first = create_test_app()
            .oneshot(create_request(&body))
            .await
            .unwrap();
        let second = create_test_app()
            .oneshot(create_request(&body))
            .await
            .unwrap();

        // Then
        assert_eq!(first.status(), second.status());
        assert_eq!(body_to_json(first).await, body_to_json(second).await);
    }

    // ===== エラーパス =====

    #[tokio::test]
    async fn test_sum_数値以外の値で400を返す() {
        // Given
        let sut = create_test_app();
        let body = serde_json::json!({ "a": "foo", "b": 2 });

        // When
        let response = sut.oneshot(create_request(&body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_to_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({ "detail": "a and b must be numbers" })
        );
    }

    #[tokio::test]
    async fn test_sum_フィールド欠落で400を返す() {
        // Given
        let sut = create_test_app();
        let body = serde_json::json!({ "b": 2 });

        // When
        let response = sut.oneshot(create_request(&body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_to_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({ "detail": "a and b must be numbers" })
        );
    }

    #[tokio::test]
    async fn test_sum_空のボディで400を返す() {
        // Given
        let sut = create_test_app();
        let body = serde_json::json!({});

        // When
        let response = sut.oneshot(create_request(&body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sum_不正なjsonで400を返す() {
        // Given
        let sut = create_test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/sum")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_to_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({ "detail": "a and b must be numbers" })
        );
    }
}
