//! Request extractors that reject with `AppError`.

mod path;
mod validated_json;

pub use path::{user_id, ApiPath};
pub use validated_json::ValidatedJson;
