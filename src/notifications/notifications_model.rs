use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

pub const KIND_CONTRIBUTION: &str = "contribution";
pub const KIND_MILESTONE: &str = "milestone";
pub const KIND_GOAL_ACHIEVED: &str = "goal_achieved";

/// Database model for notifications
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
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

/// Model for creating a new notification
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::notifications)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub body: String,
}
