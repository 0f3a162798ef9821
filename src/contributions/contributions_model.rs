use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::contributions_errors::{ContributionError, Result};
use crate::goals::Goal;
use crate::milestones::Milestone;

/// Contribution made by a family member
pub const SOURCE_MEMBER: &str = "member";
/// Contribution made by an outsider through a share link
pub const SOURCE_LINK: &str = "link";

/// A single payment toward a goal. Either a family member's (carrying a
/// user id) or an external one made through a share link (carrying a
/// free-form contributor name).
#[derive(
    Queryable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::contributions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub goal_id: String,
    pub contributor_user_id: Option<String>,
    pub contributor_name: Option<String>,
    pub amount: f64,
    pub note: Option<String>,
    pub source: String,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a contribution
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::contributions)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub goal_id: String,
    pub contributor_user_id: Option<String>,
    pub contributor_name: Option<String>,
    pub amount: f64,
    pub note: Option<String>,
    pub source: String,
}

impl NewContribution {
    /// Validates the contribution data
    pub fn validate(&self) -> Result<()> {
        if self.amount <= 0.0 {
            return Err(ContributionError::InvalidData(
                "Contribution amount must be positive".to_string(),
            ));
        }
        if self.contributor_user_id.is_none() && self.contributor_name.is_none() {
            return Err(ContributionError::InvalidData(
                "Contribution needs a contributor user or name".to_string(),
            ));
        }
        Ok(())
    }

    /// Display name used in notification text
    pub fn contributor_label(&self) -> String {
        self.contributor_name
            .clone()
            .unwrap_or_else(|| "A family member".to_string())
    }
}

/// Everything that happened when a contribution was recorded: the updated
/// goal, the fresh progress percentage and any milestones crossed by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionOutcome {
    pub contribution: Contribution,
    pub goal: Goal,
    pub percentage: f64,
    pub awarded_milestones: Vec<Milestone>,
    pub goal_newly_achieved: bool,
}
