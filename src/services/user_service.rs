//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a new user with a storage-assigned id
    async fn create_user(&self, name: String, email: String) -> AppResult<User>;

    /// Replace name and email; the id never changes
    async fn update_user(&self, id: i32, name: String, email: String) -> AppResult<User>;

    /// Permanently delete user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
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
        self.repo.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        tracing::debug!(user_id = id, "Fetching user");
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, name: String, email: String) -> AppResult<User> {
        let user = self.repo.create(name, email).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, name: String, email: String) -> AppResult<User> {
        let user = self.repo.update(id, name, email).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
