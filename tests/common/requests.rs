//! Request helpers
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot` and decode
//! the JSON body.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Send a request and return the status and decoded JSON body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router returned an error");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, body)
}

/// POST a JSON body, optionally with an `Authorization` header
pub async fn post_json(
    router: &Router,
    path: &str,
    body: &Value,
    authorization: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(router, request).await
}

/// POST raw bytes as JSON
pub async fn post_raw(router: &Router, path: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("Failed to build request");
    send(router, request).await
}

/// GET a path
pub async fn get_json(router: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");
    send(router, request).await
}

/// Send a CORS preflight and return the status and response headers
pub async fn preflight(router: &Router, path: &str, origin: &str, method: Method) -> (StatusCode, HeaderMap) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(path)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, method.as_str())
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,authorization")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router returned an error");
    (response.status(), response.headers().clone())
}

/// Header value as lowercase text, empty when absent
pub fn header_text(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase()
}
