//! Explicit field validation for user records.

use validator::{Validate, ValidationErrors};

use crate::error::{DomainError, DomainResult};
use crate::user::UserFields;

/// Check `fields` against the declared bounds.
///
/// Returns `DomainError::Validation` naming every offending field, sorted by
/// field name, e.g. `"age: must be between 0 and 120"`.
pub fn validate_user_fields(fields: &UserFields) -> DomainResult<()> {
    fields
        .validate()
        .map_err(|e| DomainError::validation(describe(&e)))
}

/// Render validation errors as `field: message` pairs.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    parts.sort();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(username: &str, age: i64) -> DomainResult<()> {
        validate_user_fields(&UserFields::new(username, age))
    }

    #[test]
    fn username_length_bounds() {
        assert!(check("ab", 30).is_err());
        assert!(check("abc", 30).is_ok());
        assert!(check(&"a".repeat(50), 30).is_ok());
        assert!(check(&"a".repeat(51), 30).is_err());
    }

    #[test]
    fn username_counts_characters_not_bytes() {
        // Three characters, six bytes
        assert!(check("Юля", 30).is_ok());
    }

    #[test]
    fn age_bounds() {
        assert!(check("valid", -1).is_err());
        assert!(check("valid", 0).is_ok());
        assert!(check("valid", 120).is_ok());
        assert!(check("valid", 121).is_err());
    }

    #[test]
    fn error_names_offending_field() {
        let err = check("ab", 30).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("username: must be between 3 and 50 characters".into())
        );

        let err = check("valid", 121).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("age: must be between 0 and 120".into())
        );
    }

    #[test]
    fn error_lists_all_fields_in_order() {
        let err = check("", 500).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: age: must be between 0 and 120, \
             username: must be between 3 and 50 characters"
        );
    }
}
