use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::links_errors::{LinkError, Result};

/// A shareable contribution link. Anyone holding the token can contribute
/// to the goal until the link expires, runs out of uses, or is revoked.
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
#[diesel(table_name = crate::schema::share_links)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub id: String,
    pub goal_id: String,
    pub token: String,
    pub expires_at: Option<NaiveDateTime>,
    pub max_uses: Option<i32>,
    pub use_count: i32,
    pub is_revoked: bool,
    pub created_at: NaiveDateTime,
}

impl ShareLink {
    /// Checks whether the link can still accept contributions at `now`.
    pub fn ensure_usable(&self, now: NaiveDateTime) -> Result<()> {
        if self.is_revoked {
            return Err(LinkError::Revoked(self.token.clone()));
        }
        if let Some(expiry) = self.expires_at {
            if now >= expiry {
                return Err(LinkError::Expired(self.token.clone()));
            }
        }
        if let Some(max) = self.max_uses {
            if self.use_count >= max {
                return Err(LinkError::Exhausted(self.token.clone()));
            }
        }
        Ok(())
    }
}

/// Input model for creating a new share link
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewShareLink {
    pub goal_id: String,
    pub expires_at: Option<NaiveDateTime>,
    pub max_uses: Option<i32>,
}

impl NewShareLink {
    /// Validates the new link data
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_uses {
            if max <= 0 {
                return Err(LinkError::InvalidData(
                    "Link max uses must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Insertable row for share links
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::share_links)]
pub struct ShareLinkRow {
    pub id: String,
    pub goal_id: String,
    pub token: String,
    pub expires_at: Option<NaiveDateTime>,
    pub max_uses: Option<i32>,
    pub use_count: i32,
    pub is_revoked: bool,
}
