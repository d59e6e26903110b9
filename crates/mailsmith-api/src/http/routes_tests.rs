use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use mailsmith_core::catalog;
use mailsmith_protocols::{Category, ErrorBody, GenerateResponse};

use super::*;

fn create_test_router() -> Router {
    create_router(Arc::new(AppState::default()))
}

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/generate-template")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_endpoint_sales_prompt() {
    let app = create_test_router();
    let response = app
        .oneshot(generate_request(
            r#"{"prompt":"Sales outreach to tech companies"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: GenerateResponse = read_json(response).await;

    let sales_subjects: Vec<_> = catalog::variants(Category::Sales)
        .iter()
        .map(|variant| variant.subject)
        .collect();
    assert!(sales_subjects.contains(&body.subject.as_str()));
    assert!(!body.content.contains("[Your name]"));
}

#[tokio::test]
async fn test_generate_endpoint_empty_prompt() {
    let app = create_test_router();
    let response = app.oneshot(generate_request(r#"{"prompt":""}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = read_json(response).await;
    assert_eq!(body.error, "Prompt is required");
}

#[tokio::test]
async fn test_generate_endpoint_missing_prompt_field() {
    let app = create_test_router();
    let response = app.oneshot(generate_request(r#"{}"#)).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_generate_endpoint_full_exclusion_wraps() {
    let app = create_test_router();
    let response = app
        .oneshot(generate_request(
            r#"{"prompt":"boost our revenue","exclude":[0,1,2]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: GenerateResponse = read_json(response).await;
    assert_eq!(body.template_index, 0);
    assert!(body.has_more);
}

#[tokio::test]
async fn test_generate_endpoint_requires_bearer_when_configured() {
    let app = create_router(Arc::new(AppState::new(Some("secret".into()))));
    let response = app
        .oneshot(generate_request(r#"{"prompt":"boost our revenue"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_generate_endpoint_accepts_configured_bearer() {
    let app = create_router(Arc::new(AppState::new(Some("secret".into()))));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/generate-template")
                .header("content-type", "application/json")
                .header("authorization", "Bearer secret")
                .body(Body::from(r#"{"prompt":"boost our revenue"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_header_present() {
    let app = create_test_router();
    let response = app
        .oneshot(generate_request(r#"{"prompt":"hello"}"#))
        .await
        .unwrap();

    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = create_test_router();
    let response = app
        .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
