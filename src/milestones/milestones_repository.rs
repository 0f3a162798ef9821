use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::milestones::milestones_errors::{MilestoneError, Result};
use crate::milestones::milestones_model::{Milestone, NewMilestone, DEFAULT_MILESTONES};
use crate::milestones::milestones_traits::MilestoneRepositoryTrait;
use crate::schema::milestones;
use crate::schema::milestones::dsl::*;

pub struct MilestoneRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl MilestoneRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        MilestoneRepository { pool }
    }

    pub fn seed_for_goal(&self, milestone_goal_id: &str) -> Result<Vec<Milestone>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| MilestoneError::DatabaseError(e.to_string()))?;
        self.seed_in_transaction(&mut conn, milestone_goal_id)
    }

    pub fn seed_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        milestone_goal_id: &str,
    ) -> Result<Vec<Milestone>> {
        let rows: Vec<NewMilestone> = DEFAULT_MILESTONES
            .iter()
            .map(|(pct, msg)| NewMilestone {
                id: Uuid::new_v4().to_string(),
                goal_id: milestone_goal_id.to_string(),
                percentage: *pct,
                message: msg.to_string(),
            })
            .collect();

        diesel::insert_into(milestones::table)
            .values(&rows)
            .execute(conn)?;

        self.list_with_conn(conn, milestone_goal_id)
    }

    pub fn list_for_goal(&self, milestone_goal_id: &str) -> Result<Vec<Milestone>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| MilestoneError::DatabaseError(e.to_string()))?;
        self.list_with_conn(&mut conn, milestone_goal_id)
    }

    fn list_with_conn(
        &self,
        conn: &mut SqliteConnection,
        milestone_goal_id: &str,
    ) -> Result<Vec<Milestone>> {
        Ok(milestones
            .filter(goal_id.eq(milestone_goal_id))
            .order(percentage.asc())
            .load::<Milestone>(conn)?)
    }

    pub fn award_up_to_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        milestone_goal_id: &str,
        progress_percentage: f64,
    ) -> Result<Vec<Milestone>> {
        let pending: Vec<Milestone> = milestones
            .filter(goal_id.eq(milestone_goal_id))
            .filter(achieved_at.is_null())
            .filter(percentage.le(progress_percentage))
            .order(percentage.asc())
            .load::<Milestone>(conn)?;

        if pending.is_empty() {
            return Ok(pending);
        }

        let now = chrono::Utc::now().naive_utc();
        let pending_ids: Vec<String> = pending.iter().map(|m| m.id.clone()).collect();

        diesel::update(milestones.filter(id.eq_any(&pending_ids)))
            .set(achieved_at.eq(Some(now)))
            .execute(conn)?;

        Ok(milestones
            .filter(id.eq_any(&pending_ids))
            .order(percentage.asc())
            .load::<Milestone>(conn)?)
    }
}

impl MilestoneRepositoryTrait for MilestoneRepository {
    fn seed_for_goal(&self, milestone_goal_id: &str) -> Result<Vec<Milestone>> {
        MilestoneRepository::seed_for_goal(self, milestone_goal_id)
    }

    fn seed_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        milestone_goal_id: &str,
    ) -> Result<Vec<Milestone>> {
        MilestoneRepository::seed_in_transaction(self, conn, milestone_goal_id)
    }

    fn list_for_goal(&self, milestone_goal_id: &str) -> Result<Vec<Milestone>> {
        MilestoneRepository::list_for_goal(self, milestone_goal_id)
    }

    fn award_up_to_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        milestone_goal_id: &str,
        progress_percentage: f64,
    ) -> Result<Vec<Milestone>> {
        MilestoneRepository::award_up_to_in_transaction(
            self,
            conn,
            milestone_goal_id,
            progress_percentage,
        )
    }
}
