//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier issued to the first user created in an empty store
pub const FIRST_USER_ID: u64 = 1;

// =============================================================================
// Seed Data
// =============================================================================

/// Records loaded into the registry at startup, in insertion order.
pub const SEED_USERS: &[(&str, i64)] = &[("UrbanUser", 24), ("UrbanTest", 22), ("Capybara", 60)];
