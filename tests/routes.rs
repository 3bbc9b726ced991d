//! Router-level tests over a lazy pool: everything exercised here is
//! decided before any connection is made, so no live Postgres is needed.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use vanfleet::{api_routes, auth, AppState, Config};

const JWT_KEY: &str = "test-signing-key";

fn test_app() -> Router {
    let config = Config {
        database_url: "postgres://postgres@127.0.0.1:1/vanfleet_test".into(),
        port: 0,
        jwt_key: JWT_KEY.into(),
        auth_user: "admin".into(),
        auth_pass: "hunter2".into(),
    };
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    api_routes(AppState::new(pool, config))
}

fn bearer() -> String {
    format!("Bearer {}", auth::issue_token("admin", JWT_KEY).unwrap())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value, token: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn home_route_answers() {
    let (status, body) = send(get_request("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Server is functioning");
}

#[tokio::test]
async fn malformed_engine_id_is_rejected_without_store_access() {
    let (status, body) = send(get_request("/api/v1/engine/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Invalid engine ID");
}

#[tokio::test]
async fn non_v4_uuid_is_rejected() {
    // Syntactically valid v5 UUID.
    let (status, body) =
        send(get_request("/api/v1/van/a6edc906-2f9f-5fb2-a373-efac406f0ef2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid van ID");
}

#[tokio::test]
async fn mutating_route_requires_token() {
    let (status, _) = send(json_request(
        "POST",
        "/api/v1/engine",
        json!({"displacement": 2000, "no-of-cylinders": 4, "material": "iron"}),
        None,
    ))
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let (status, _) = send(json_request(
        "DELETE",
        &format!("/api/v1/engine/{}", uuid::Uuid::new_v4()),
        Value::Null,
        Some("Bearer not.a.token".into()),
    ))
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let (status, body) = send(json_request(
        "POST",
        "/api/v1/login",
        json!({"username": "admin", "password": "wrong"}),
        None,
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Incorrect username or password for authorization"
    );
}

#[tokio::test]
async fn login_issues_verifiable_token() {
    let (status, body) = send(json_request(
        "POST",
        "/api/v1/login",
        json!({"username": "admin", "password": "hunter2"}),
        None,
    ))
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = body["data"][0]["token"].as_str().unwrap();
    let claims = auth::verify_token(token, JWT_KEY).unwrap();
    assert_eq!(claims.sub, "admin");
}

#[tokio::test]
async fn empty_patch_is_refused_before_any_statement() {
    let (status, body) = send(json_request(
        "PATCH",
        &format!("/api/v1/engine/{}", uuid::Uuid::new_v4()),
        json!({}),
        Some(bearer()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "nothing to update");
}

#[tokio::test]
async fn unknown_patch_keys_count_as_nothing_to_update() {
    let (status, body) = send(json_request(
        "PATCH",
        &format!("/api/v1/van/{}", uuid::Uuid::new_v4()),
        json!({"unknown-field": 1}),
        Some(bearer()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "nothing to update");
}

#[tokio::test]
async fn patch_validates_present_fields() {
    let (status, body) = send(json_request(
        "PATCH",
        &format!("/api/v1/engine/{}", uuid::Uuid::new_v4()),
        json!({"displacement": 1499}),
        Some(bearer()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "displacement must fall within the range of 1500-4000"
    );
}

#[tokio::test]
async fn patch_body_must_be_an_object() {
    let (status, _) = send(json_request(
        "PATCH",
        &format!("/api/v1/engine/{}", uuid::Uuid::new_v4()),
        json!([1, 2, 3]),
        Some(bearer()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_rejects_invalid_engine_before_store() {
    let (status, body) = send(json_request(
        "POST",
        "/api/v1/engine",
        json!({"displacement": 2000, "no-of-cylinders": 5, "material": "iron"}),
        Some(bearer()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "no. of cylinders must be one of following - [4, 6, 8]"
    );
}

#[tokio::test]
async fn create_rejects_missing_required_van_fields() {
    let (status, body) = send(json_request(
        "POST",
        "/api/v1/van",
        json!({"brand": "Force"}),
        Some(bearer()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn put_with_wrong_value_types_is_a_client_error() {
    let (status, body) = send(json_request(
        "PUT",
        &format!("/api/v1/engine/{}", uuid::Uuid::new_v4()),
        json!({"displacement": "two thousand"}),
        Some(bearer()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Value type is incorrect");
}
