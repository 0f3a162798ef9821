use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::contributions::contributions_errors::{ContributionError, Result};
use crate::contributions::contributions_model::{Contribution, NewContribution};
use crate::contributions::contributions_traits::ContributionRepositoryTrait;
use crate::db::get_connection;
use crate::schema::contributions;
use crate::schema::contributions::dsl::*;

pub struct ContributionRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ContributionRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        ContributionRepository { pool }
    }
}

impl ContributionRepositoryTrait for ContributionRepository {
    fn insert_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        mut new_contribution: NewContribution,
    ) -> Result<Contribution> {
        new_contribution.validate()?;

        new_contribution.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(contributions::table)
            .values(&new_contribution)
            .returning(contributions::all_columns)
            .get_result(conn)?)
    }

    fn list_for_goal(&self, contribution_goal_id: &str) -> Result<Vec<Contribution>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| ContributionError::DatabaseError(e.to_string()))?;

        Ok(contributions
            .filter(goal_id.eq(contribution_goal_id))
            .order(created_at.desc())
            .load::<Contribution>(&mut conn)?)
    }

    fn total_for_goal(&self, contribution_goal_id: &str) -> Result<f64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| ContributionError::DatabaseError(e.to_string()))?;

        let total: Option<f64> = contributions
            .filter(goal_id.eq(contribution_goal_id))
            .select(sum(amount))
            .first(&mut conn)?;

        Ok(total.unwrap_or(0.0))
    }
}
