use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::users_errors::{Result, UserError};

pub const ROLE_PARENT: &str = "parent";
pub const ROLE_CHILD: &str = "child";

/// A member of a family: either a parent account or a child linked to one.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new user
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
}

impl NewUser {
    /// Validates the new user data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(UserError::InvalidData(
                "User name cannot be empty".to_string(),
            ));
        }
        match self.role.as_str() {
            ROLE_PARENT => {
                if self.email.as_deref().map_or(true, |e| e.trim().is_empty()) {
                    return Err(UserError::InvalidData(
                        "Parent accounts require an email address".to_string(),
                    ));
                }
            }
            ROLE_CHILD => {
                if self.parent_id.is_none() {
                    return Err(UserError::InvalidData(
                        "Child accounts must reference a parent".to_string(),
                    ));
                }
            }
            other => {
                return Err(UserError::InvalidData(format!(
                    "Unknown user role: {}",
                    other
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating an existing user
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}
