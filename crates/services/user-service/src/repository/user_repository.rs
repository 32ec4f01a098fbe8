//! User repository backed by the in-memory store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::{DomainError, DomainResult, User, UserFields, UserId};

use super::user_store::UserStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// List all users in insertion order
    fn list(&self) -> DomainResult<Vec<User>>;

    /// Find user by ID
    fn find_by_id(&self, id: UserId) -> DomainResult<User>;

    /// Create a new user
    fn create(&self, fields: UserFields) -> DomainResult<User>;

    /// Update username and age
    fn update(&self, id: UserId, fields: UserFields) -> DomainResult<User>;

    /// Delete user by ID, returning the removed record
    fn delete(&self, id: UserId) -> DomainResult<User>;

    /// Number of stored users
    fn count(&self) -> DomainResult<usize>;
}

/// Concrete implementation of UserRepository over a locked `UserStore`.
///
/// The lock makes the store shareable across request handlers; it does not
/// make sequences of operations atomic.
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Create new repository instance
    pub fn new(store: UserStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, UserStore>> {
        self.store
            .read()
            .map_err(|_| DomainError::internal("user store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, UserStore>> {
        self.store
            .write()
            .map_err(|_| DomainError::internal("user store lock poisoned"))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(UserStore::new())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.read()?.list_all())
    }

    fn find_by_id(&self, id: UserId) -> DomainResult<User> {
        self.read()?.get(id).cloned()
    }

    fn create(&self, fields: UserFields) -> DomainResult<User> {
        self.write()?.create(fields)
    }

    fn update(&self, id: UserId, fields: UserFields) -> DomainResult<User> {
        self.write()?.update(id, fields)
    }

    fn delete(&self, id: UserId) -> DomainResult<User> {
        self.write()?.delete(id)
    }

    fn count(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }
}
