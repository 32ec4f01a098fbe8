//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user registry use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{User, UserFields, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Register a new user
    async fn create_user(&self, username: String, age: i64) -> AppResult<User>;

    /// Replace username and age of an existing user
    async fn update_user(&self, id: UserId, username: String, age: i64) -> AppResult<User>;

    /// Delete user, returning the removed record
    async fn delete_user(&self, id: UserId) -> AppResult<User>;

    /// Number of registered users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list()?)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        Ok(self.repo.find_by_id(id)?)
    }

    async fn create_user(&self, username: String, age: i64) -> AppResult<User> {
        let user = self
            .repo
            .create(UserFields::new(username, age))
            .inspect_err(|e| tracing::debug!(error = %e, "User creation rejected"))?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, username: String, age: i64) -> AppResult<User> {
        let user = self
            .repo
            .update(id, UserFields::new(username, age))
            .inspect_err(|e| tracing::debug!(user_id = id, error = %e, "User update rejected"))?;

        tracing::info!(user_id = user.id, username = %user.username, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<User> {
        let user = self.repo.delete(id)?;

        tracing::info!(user_id = id, "User deleted");
        Ok(user)
    }

    async fn count_users(&self) -> AppResult<usize> {
        Ok(self.repo.count()?)
    }
}
