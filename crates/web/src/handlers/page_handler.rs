//! HTML page handlers.

use axum::{extract::State, response::Html};

use common::AppResult;

use crate::extractors::{user_id, ApiPath};
use crate::state::AppState;
use crate::views;

/// Listing page with every registered user
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let users = state.user_service.list_users().await?;
    Ok(Html(views::users_page(&users)))
}

/// Detail page for one user
pub async fn user_detail(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<i64>,
) -> AppResult<Html<String>> {
    let user = state.user_service.get_user(user_id(raw_id)?).await?;
    Ok(Html(views::user_page(&user)))
}
