//! Path-parameter user handlers.
//!
//! These mirror the JSON API but take every argument from the URL, e.g.
//! `POST /user/Capybara/60`. Segment names are shared between the routes
//! because the router requires one name per position; values are extracted
//! positionally.

use axum::{extract::State, response::Json};
use serde::Serialize;

use common::AppResult;
use domain::User;

use crate::extractors::{user_id, ApiPath};
use crate::state::AppState;

/// Confirmation returned after a deletion
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// `POST /user/:username/:age`
pub async fn create_user(
    State(state): State<AppState>,
    ApiPath((username, age)): ApiPath<(String, i64)>,
) -> AppResult<Json<User>> {
    let user = state.user_service.create_user(username, age).await?;
    Ok(Json(user))
}

/// `PUT /user/:user_id/:username/:age`
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath((raw_id, username, age)): ApiPath<(i64, String, i64)>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(user_id(raw_id)?, username, age)
        .await?;
    Ok(Json(user))
}

/// `DELETE /user/:user_id`
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<i64>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.user_service.delete_user(user_id(raw_id)?).await?;
    Ok(Json(DeletedResponse {
        message: format!("User with ID {} has been deleted", deleted.id),
    }))
}
