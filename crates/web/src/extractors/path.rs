//! Path extractor with JSON error bodies.

use axum::{extract::FromRequestParts, extract::Path};

use common::{AppError, AppResult};
use domain::UserId;

/// `Path` wrapper whose rejection is an [`AppError::BadRequest`], so malformed
/// ids and ages get the same error body as every other failure.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Converts a signed path id into a [`UserId`].
///
/// Ids are parsed as `i64` so that `-1` is a well-formed id with no record
/// behind it (404) rather than a malformed segment (400).
pub fn user_id(raw: i64) -> AppResult<UserId> {
    UserId::try_from(raw).map_err(|_| AppError::not_found(format!("User {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_id_converts() {
        assert_eq!(user_id(7).unwrap(), 7);
    }

    #[test]
    fn negative_id_is_not_found() {
        let err = user_id(-1).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref what) if what == "User -1"));
    }
}
