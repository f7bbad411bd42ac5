use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use canny_api::ApiConfig;
use canny_proxy::{app, ProxyOptions};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn proxy(api_path: Option<&str>, origin: Option<String>) -> Router {
    app(
        ProxyOptions {
            api_path: api_path.map(str::to_string),
            origin,
        },
        Arc::new(ApiConfig::default()),
    )
}

/// Spawns an echo upstream that answers POST /echo with the request body,
/// returning its origin URL.
async fn spawn_echo_upstream() -> String {
    let router = Router::new().route("/echo", post(|body: String| async move { body }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn preflight_is_answered_locally_with_permissive_headers() {
    let proxy = proxy(Some("/api"), None);

    let response = proxy
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/boards/retrieve")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
}

#[tokio::test]
async fn request_outside_the_prefix_is_rejected() {
    let proxy = proxy(Some("/api"), None);

    let response = proxy
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/other/boards/retrieve")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn strips_prefix_and_relays_upstream_response() {
    let origin = spawn_echo_upstream().await;
    let proxy = proxy(Some("/api"), Some(origin));

    let response = proxy
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/echo")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("hello upstream"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(body_string(response).await, "hello upstream");
}

#[tokio::test]
async fn forwards_every_path_when_no_prefix_is_configured() {
    let origin = spawn_echo_upstream().await;
    let proxy = proxy(None, Some(origin));

    let response = proxy
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .body(Body::from("no prefix"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "no prefix");
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    // Port 1 on localhost refuses connections.
    let proxy = proxy(Some("/api"), Some("http://127.0.0.1:1".to_string()));

    let response = proxy
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/boards/retrieve")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_string(response).await, "upstream request failed");
}
