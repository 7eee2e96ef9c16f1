#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use coop_api::config::{ServerConfig, SessionConfig};
use coop_api::router::build_app_router;
use coop_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and 12-hour sessions without `Secure`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig::new(12, false),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request, optionally carrying a `Cookie` header.
pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a form-encoded POST request, optionally carrying a `Cookie` header.
pub async fn post_form(app: Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

/// The `name=value` pair of a cookie set by the response, if any.
pub fn set_cookie(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

/// Assert a 303 to `to`.
pub fn assert_redirect(response: &Response, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), to);
}

/// Log in through the form and return the `coop_session=...` cookie pair.
pub async fn login(app: Router, email: &str, role: &str) -> String {
    let response = post_form(app, "/", &format!("email={email}&role={role}"), None).await;
    assert_eq!(
        response.status(),
        StatusCode::SEE_OTHER,
        "login as {email}/{role} should redirect"
    );
    set_cookie(&response, "coop_session").expect("login must set the session cookie")
}

/// Join cookie pairs into a single `Cookie` header value.
pub fn cookies(pairs: &[&str]) -> String {
    pairs.join("; ")
}
