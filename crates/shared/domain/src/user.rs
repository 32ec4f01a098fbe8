//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Store-assigned user identifier
pub type UserId = u64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier, assigned by the registry
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: UserId,
    /// Username (3 to 50 characters)
    #[cfg_attr(feature = "openapi", schema(example = "UrbanUser"))]
    pub username: String,
    /// Age in years (0 to 120)
    #[cfg_attr(feature = "openapi", schema(example = 24))]
    pub age: i64,
}

impl User {
    /// Create a user record from already validated fields
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            username: fields.username,
            age: fields.age,
        }
    }

    /// Replace the mutable fields, keeping the identifier
    pub fn apply(&mut self, fields: UserFields) {
        self.username = fields.username;
        self.age = fields.age;
    }
}

/// The caller-supplied part of a user record.
///
/// Bounds are declared here and checked by
/// [`validate_user_fields`](crate::validation::validate_user_fields).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserFields {
    /// Username (3 to 50 characters)
    #[validate(length(min = 3, max = 50, message = "must be between 3 and 50 characters"))]
    #[cfg_attr(
        feature = "openapi",
        schema(example = "NewPerson", min_length = 3, max_length = 50)
    )]
    pub username: String,
    /// Age in years (0 to 120)
    #[validate(range(min = 0, max = 120, message = "must be between 0 and 120"))]
    #[cfg_attr(feature = "openapi", schema(example = 30, minimum = 0, maximum = 120))]
    pub age: i64,
}

impl UserFields {
    pub fn new(username: impl Into<String>, age: i64) -> Self {
        Self {
            username: username.into(),
            age,
        }
    }
}
