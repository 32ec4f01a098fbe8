//! In-memory user record store.
//!
//! Records are kept in insertion order alongside a secondary index keyed by
//! id. Identifiers come from a monotonic counter and are never reused, even
//! after the record that held them is deleted.

use std::collections::HashMap;

use domain::{
    validate_user_fields, DomainError, DomainResult, User, UserFields, UserId, FIRST_USER_ID,
    SEED_USERS,
};

/// Owner of all user records.
#[derive(Debug, Clone)]
pub struct UserStore {
    /// Ids in insertion order
    order: Vec<UserId>,
    /// Secondary index: id -> record
    index: HashMap<UserId, User>,
    /// Next id to hand out
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
            next_id: FIRST_USER_ID,
        }
    }

    /// Create a store holding the fixed startup records (ids 1, 2, 3).
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (username, age) in SEED_USERS {
            if let Err(e) = store.create(UserFields::new(*username, *age)) {
                tracing::warn!(username = %username, error = %e, "Skipping invalid seed user");
            }
        }
        store
    }

    /// All users in insertion order
    pub fn list_all(&self) -> Vec<User> {
        self.order
            .iter()
            .filter_map(|id| self.index.get(id))
            .cloned()
            .collect()
    }

    /// Look up a user by id
    pub fn get(&self, id: UserId) -> DomainResult<&User> {
        self.index.get(&id).ok_or_else(|| not_found(id))
    }

    /// Validate and append a new user, assigning the next id
    pub fn create(&mut self, fields: UserFields) -> DomainResult<User> {
        validate_user_fields(&fields)?;

        let id = self.next_id;
        self.next_id += 1;

        let user = User::new(id, fields);
        self.order.push(id);
        self.index.insert(id, user.clone());
        Ok(user)
    }

    /// Replace username and age of an existing user.
    ///
    /// A missing id is reported before the new fields are validated.
    pub fn update(&mut self, id: UserId, fields: UserFields) -> DomainResult<User> {
        let user = self.index.get_mut(&id).ok_or_else(|| not_found(id))?;
        validate_user_fields(&fields)?;

        user.apply(fields);
        Ok(user.clone())
    }

    /// Remove a user from both the ordering and the index
    pub fn delete(&mut self, id: UserId) -> DomainResult<User> {
        let user = self.index.remove(&id).ok_or_else(|| not_found(id))?;
        self.order.retain(|existing| *existing != id);
        Ok(user)
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User {}", id))
}
