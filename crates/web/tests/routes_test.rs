//! Integration tests for the HTTP routes.
//!
//! Each test builds the router over a fresh in-memory registry and drives it
//! with `tower::ServiceExt::oneshot`, so no socket is bound.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use web_lib::config::RegistryConfig;
use web_lib::routes::create_router;
use web_lib::state::AppState;

// =============================================================================
// Test Helpers
// =============================================================================

fn app(seed: bool) -> Router {
    let config = RegistryConfig {
        seed_users: seed,
        ..RegistryConfig::default()
    };
    create_router(AppState::in_memory(config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// HTML Pages
// =============================================================================

#[tokio::test]
async fn test_index_lists_seeded_users() {
    let app = app(true);
    let (status, body) = send(&app, Method::GET, "/", None).await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    for name in ["UrbanUser", "UrbanTest", "Capybara"] {
        assert!(html.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_index_without_seed_is_empty() {
    let app = app(false);
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("No users registered."));
}

#[tokio::test]
async fn test_user_detail_page() {
    let app = app(true);
    let (status, body) = send(&app, Method::GET, "/user/2", None).await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("UrbanTest"));
    assert!(html.contains("<dd>22</dd>"));
}

#[tokio::test]
async fn test_user_detail_page_not_found() {
    let app = app(true);
    let (status, body) = send_json(&app, Method::GET, "/user/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_user_detail_page_negative_id_not_found() {
    let app = app(true);

    let (status, body) = send_json(&app, Method::GET, "/user/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User -1 not found");

    let (status, _) = send_json(&app, Method::GET, "/user/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_detail_page_rejects_non_numeric_id() {
    let app = app(true);
    let (status, body) = send_json(&app, Method::GET, "/user/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Path-Parameter API
// =============================================================================

#[tokio::test]
async fn test_path_create_update_delete() {
    let app = app(true);

    let (status, created) = send_json(&app, Method::POST, "/user/NewPerson/30", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({"id": 4, "username": "NewPerson", "age": 30}));

    let (status, updated) = send_json(&app, Method::PUT, "/user/4/Renamed/31", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 4, "username": "Renamed", "age": 31}));

    let (status, body) = send_json(&app, Method::DELETE, "/user/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User with ID 4 has been deleted");

    let (status, _) = send_json(&app, Method::DELETE, "/user/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_path_create_rejects_out_of_range_age() {
    let app = app(true);
    let (status, body) = send_json(&app, Method::POST, "/user/NewPerson/121", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "age: must be between 0 and 120");
}

#[tokio::test]
async fn test_path_create_rejects_short_username() {
    let app = app(true);
    let (status, body) = send_json(&app, Method::POST, "/user/ab/30", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"]["message"],
        "username: must be between 3 and 50 characters"
    );
}

#[tokio::test]
async fn test_path_rejects_non_numeric_age() {
    let app = app(true);
    let (status, body) = send_json(&app, Method::POST, "/user/NewPerson/old", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_path_update_missing_user() {
    let app = app(true);
    let (status, _) = send_json(&app, Method::PUT, "/user/99/Somebody/30", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_path_negative_id_not_found() {
    let app = app(true);

    let (status, body) = send_json(&app, Method::PUT, "/user/-1/Somebody/30", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = send_json(&app, Method::DELETE, "/user/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User -1 not found");

    let (_, health) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(health["users"], 3);
}

#[tokio::test]
async fn test_seeded_scenario_over_http() {
    let app = app(true);

    let (status, user) = send_json(&app, Method::GET, "/users/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user, json!({"id": 2, "username": "UrbanTest", "age": 22}));

    let (status, _) = send_json(&app, Method::DELETE, "/user/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, users) = send_json(&app, Method::GET, "/users", None).await;
    let ids: Vec<u64> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let (status, created) = send_json(&app, Method::POST, "/user/NewPerson/30", None).await;
    assert_eq!(status, StatusCode::OK);
    let new_id = created["id"].as_u64().unwrap();
    assert!(!ids.contains(&new_id));
}

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn test_json_create_and_get() {
    let app = app(false);

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "Capybara", "age": 60})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, fetched) = send_json(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_json_create_validation_error() {
    let app = app(false);
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "ok", "age": -1})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"]["message"],
        "age: must be between 0 and 120, username: must be between 3 and 50 characters"
    );
}

#[tokio::test]
async fn test_json_create_malformed_body() {
    let app = app(false);
    let (status, body) = send_json(&app, Method::POST, "/users", Some(json!({"username": "x"}))).await;

    assert!(status.is_client_error());
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_json_update_and_delete() {
    let app = app(true);

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        "/users/1",
        Some(json!({"username": "UrbanUser", "age": 25})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 1, "username": "UrbanUser", "age": 25}));

    let (status, body) = send_json(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send_json(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_json_negative_id_not_found() {
    let app = app(true);

    let (status, body) = send_json(&app, Method::GET, "/users/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = send_json(&app, Method::DELETE, "/users/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send_json(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health & Docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_user_count() {
    let app = app(true);
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "users": 3}));
}

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let app = app(true);
    let (status, body) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/users").is_some());
    assert!(body["paths"].get("/users/{id}").is_some());

    let schemas = &body["components"]["schemas"];
    assert!(schemas.get("User").is_some());
    assert_eq!(schemas["UserFields"]["properties"]["username"]["minLength"], 3);
    assert_eq!(schemas["UserFields"]["properties"]["age"]["maximum"], 120.0);
}
