use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Reward checkpoints every goal is seeded with at creation.
pub const DEFAULT_MILESTONES: &[(f64, &str)] = &[
    (25.0, "A quarter saved! Your plant has sprouted its first leaves."),
    (50.0, "Halfway there! The plant is standing tall."),
    (75.0, "Three quarters done! Buds are forming."),
    (100.0, "Goal reached! Your plant is bearing fruit."),
];

/// A reward checkpoint on a goal's progress
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
#[diesel(table_name = crate::schema::milestones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub goal_id: String,
    pub percentage: f64,
    pub message: String,
    pub achieved_at: Option<NaiveDateTime>,
}

impl Milestone {
    pub fn is_achieved(&self) -> bool {
        self.achieved_at.is_some()
    }
}

/// Insertable model used when seeding a goal's milestones
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::milestones)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub id: String,
    pub goal_id: String,
    pub percentage: f64,
    pub message: String,
}
