use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserUpdate};
use super::users_repository::UserRepository;
use crate::users::Result;

/// Service for managing parent and child accounts
pub struct UserService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new user
    pub fn create_user(&self, new_user: NewUser) -> Result<User> {
        debug!(
            "Creating user..., role: {}, parent_id: {:?}",
            new_user.role, new_user.parent_id
        );
        let repo = UserRepository::new(self.pool.clone());
        repo.create(new_user)
    }

    /// Applies a partial update to an existing user
    pub fn update_user(&self, user_id: &str, mut user_update: UserUpdate) -> Result<User> {
        user_update.updated_at = chrono::Utc::now().naive_utc();
        let repo = UserRepository::new(self.pool.clone());
        repo.update(user_id, user_update)
    }

    /// Retrieves a user by its ID
    pub fn get_user(&self, user_id: &str) -> Result<User> {
        let repo = UserRepository::new(self.pool.clone());
        repo.get_by_id(user_id)
    }

    /// Lists all users, optionally filtering by active status
    pub fn list_users(&self, is_active_filter: Option<bool>) -> Result<Vec<User>> {
        let repo = UserRepository::new(self.pool.clone());
        repo.list(is_active_filter)
    }

    /// Lists the child accounts linked to a parent
    pub fn get_children(&self, parent_user_id: &str) -> Result<Vec<User>> {
        let repo = UserRepository::new(self.pool.clone());
        repo.list_children(parent_user_id)
    }

    /// Deactivates a user without deleting their history
    pub fn deactivate_user(&self, user_id: &str) -> Result<User> {
        let update = UserUpdate {
            name: None,
            email: None,
            is_active: Some(false),
            updated_at: chrono::Utc::now().naive_utc(),
        };
        let repo = UserRepository::new(self.pool.clone());
        repo.update(user_id, update)
    }

    /// Erases a user and everything attached to them. This is the
    /// data-retention path: goals, contributions, share links, milestones
    /// and notifications all go with the account.
    pub fn delete_user(&self, user_id: &str) -> Result<usize> {
        debug!("Deleting user {} and all dependent records", user_id);
        let repo = UserRepository::new(self.pool.clone());
        repo.delete(user_id)
    }
}
