//! HTTP request handlers.

pub mod health_handler;
pub mod page_handler;
pub mod path_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use user_handler::user_routes;
