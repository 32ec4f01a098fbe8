//! Route configuration.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{health_routes, page_handler, path_handler, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML listing
        .route("/", get(page_handler::index))
        // Path-parameter API: /user/:user_id, /user/:username/:age,
        // /user/:user_id/:username/:age
        .route(
            "/user/:user",
            get(page_handler::user_detail).delete(path_handler::delete_user),
        )
        .route("/user/:user/:value", post(path_handler::create_user))
        .route("/user/:user/:value/:age", put(path_handler::update_user))
        // JSON API
        .nest("/users", user_routes())
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
