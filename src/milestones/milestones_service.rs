use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::milestones_model::Milestone;
use super::milestones_repository::MilestoneRepository;
use crate::db::get_connection;
use crate::milestones::{MilestoneError, Result};

/// Service for reward checkpoints on savings goals
pub struct MilestoneService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl MilestoneService {
    /// Creates a new MilestoneService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Lists a goal's milestones, achieved or not, ordered by threshold
    pub fn get_milestones(&self, goal_id: &str) -> Result<Vec<Milestone>> {
        let repo = MilestoneRepository::new(self.pool.clone());
        repo.list_for_goal(goal_id)
    }

    /// Awards every milestone at or below the given progress percentage and
    /// returns the newly awarded set. Already-achieved milestones are left
    /// untouched, so calling this repeatedly with the same percentage
    /// returns an empty set after the first call.
    pub fn check_and_award(&self, goal_id: &str, percentage: f64) -> Result<Vec<Milestone>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| MilestoneError::DatabaseError(e.to_string()))?;
        let repo = MilestoneRepository::new(self.pool.clone());

        let awarded = conn.transaction(|tx_conn| {
            repo.award_up_to_in_transaction(tx_conn, goal_id, percentage)
        })?;

        if !awarded.is_empty() {
            debug!(
                "Awarded {} milestone(s) for goal {} at {:.1}%",
                awarded.len(),
                goal_id,
                percentage
            );
        }

        Ok(awarded)
    }
}
