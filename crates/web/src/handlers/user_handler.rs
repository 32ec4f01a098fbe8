//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{User, UserFields};

use crate::extractors::{user_id, ApiPath, ValidatedJson};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(user_id(raw_id)?).await?;
    Ok(Json(user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserFields,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserFields>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .user_service
        .create_user(payload.username, payload.age)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace username and age of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserFields,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<UserFields>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(user_id(raw_id)?, payload.username, payload.age)
        .await?;

    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(user_id(raw_id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
