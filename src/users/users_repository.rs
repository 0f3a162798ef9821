use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::schema::users;
use crate::schema::users::dsl::*;

use super::users_errors::{Result, UserError};
use super::users_model::{NewUser, User, UserUpdate, ROLE_CHILD};

/// Repository for managing user data in the database
pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl UserRepository {
    /// Creates a new UserRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database
    pub fn create(&self, mut new_user: NewUser) -> Result<User> {
        new_user.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        new_user.id = Some(uuid::Uuid::new_v4().to_string());

        Ok(diesel::insert_into(users::table)
            .values(&new_user)
            .returning(users::all_columns)
            .get_result(&mut conn)?)
    }

    /// Applies a partial update to an existing user
    pub fn update(&self, user_id: &str, user_update: UserUpdate) -> Result<User> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        diesel::update(users.find(user_id))
            .set(&user_update)
            .execute(&mut conn)?;

        Ok(users.find(user_id).first(&mut conn)?)
    }

    /// Retrieves a user by its ID
    pub fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        users.find(user_id).first::<User>(&mut conn).map_err(|e| match e {
            diesel::result::Error::NotFound => {
                UserError::NotFound(format!("User with id {} not found", user_id))
            }
            _ => UserError::DatabaseError(e.to_string()),
        })
    }

    /// Lists users, optionally filtering by active status
    pub fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let mut query = users::table.into_boxed();

        if let Some(active) = is_active_filter {
            query = query.filter(is_active.eq(active));
        }

        Ok(query
            .order((is_active.desc(), name.asc()))
            .load::<User>(&mut conn)?)
    }

    /// Lists the child accounts linked to a parent
    pub fn list_children(&self, parent_user_id: &str) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(users
            .filter(parent_id.eq(parent_user_id))
            .filter(role.eq(ROLE_CHILD))
            .order(name.asc())
            .load::<User>(&mut conn)?)
    }

    /// Deletes a user by its ID and returns the number of deleted records.
    /// Dependent goals, contributions, links, milestones and notifications
    /// are removed by the schema's cascade rules.
    pub fn delete(&self, user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(users.find(user_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(UserError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        Ok(affected)
    }
}
