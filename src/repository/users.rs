//! Users repository for store operations

use crate::{
    error::{AppError, AppResult},
    models::User,
};

use super::Store;

#[derive(Clone)]
pub struct UsersRepository {
    store: Store,
}

impl UsersRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Store a new user under the next unused id
    pub async fn create(&self, name: &str) -> User {
        let mut inner = self.store.write().await;
        let id = inner.next_user_id();
        let user = User {
            id,
            name: name.to_string(),
        };
        inner.users.insert(id, user.clone());
        user
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: u64) -> AppResult<User> {
        self.store
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(AppError::UserNotFound(id))
    }
}
