//! User management service

use crate::{error::AppResult, models::User, repository::Repository};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new user
    pub async fn create_user(&self, name: &str) -> User {
        let user = self.repository.users.create(name).await;
        tracing::info!(user_id = user.id, "user registered");
        user
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: u64) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }
}
