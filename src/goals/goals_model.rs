use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::goals_errors::{GoalError, Result};
use crate::plant::{visual_for, PlantVisual};

/// A savings goal owned by a user, visualized as a growing plant.
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
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: f64,
    pub current_amount: f64,
    pub plant_type: String,
    pub is_achieved: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Goal {
    /// Progress toward the target as a percentage. Deliberately left
    /// unclamped above 100 so over-funded goals keep counting.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_amount / self.target_amount * 100.0
        } else {
            0.0
        }
    }

    /// Snapshot of the goal's progress and the plant drawn for it.
    /// Recomputed on every read, never stored.
    pub fn progress(&self) -> GoalProgress {
        let percentage = self.progress_percentage();
        GoalProgress {
            goal_id: self.id.clone(),
            percentage,
            visual: visual_for(percentage, Some(&self.plant_type)),
        }
    }
}

/// Input model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: f64,
    pub plant_type: String,
}

impl NewGoal {
    /// Validates the new goal data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GoalError::InvalidData(
                "Goal name cannot be empty".to_string(),
            ));
        }
        if self.target_amount <= 0.0 {
            return Err(GoalError::InvalidData(
                "Goal target amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Non-persisted view of a goal's progress, consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub percentage: f64,
    pub visual: PlantVisual,
}
