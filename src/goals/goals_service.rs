use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use crate::db::get_connection;
use crate::errors::Error;
use crate::goals::goals_model::{Goal, GoalProgress, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::goals::Result;
use crate::milestones::MilestoneRepositoryTrait;

pub struct GoalService<R: GoalRepositoryTrait, M: MilestoneRepositoryTrait> {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    goal_repo: Arc<R>,
    milestone_repo: Arc<M>,
}

impl<R: GoalRepositoryTrait, M: MilestoneRepositoryTrait> GoalService<R, M> {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        goal_repo: Arc<R>,
        milestone_repo: Arc<M>,
    ) -> Self {
        GoalService {
            pool,
            goal_repo,
            milestone_repo,
        }
    }
}

#[async_trait]
impl<R: GoalRepositoryTrait + Send + Sync, M: MilestoneRepositoryTrait + Send + Sync>
    GoalServiceTrait for GoalService<R, M>
{
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals_for_user(user_id)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_by_id(goal_id)
    }

    fn get_progress(&self, goal_id: &str) -> Result<GoalProgress> {
        let goal = self.goal_repo.get_by_id(goal_id)?;
        Ok(goal.progress())
    }

    /// Creates the goal and its standard reward checkpoints in a single
    /// transaction: a goal never exists without its milestones.
    async fn create_goal(&self, new_goal: NewGoal) -> crate::errors::Result<Goal> {
        debug!(
            "Creating goal..., user_id: {}, target_amount: {}",
            new_goal.user_id, new_goal.target_amount
        );

        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<Goal, Error, _>(|tx_conn| {
            let goal = self
                .goal_repo
                .insert_new_goal_in_transaction(tx_conn, new_goal)?;

            self.milestone_repo.seed_in_transaction(tx_conn, &goal.id)?;

            Ok(goal)
        })
    }

    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal> {
        self.goal_repo.update_goal(updated_goal_data)
    }

    async fn delete_goal(&self, goal_id_to_delete: &str) -> Result<usize> {
        self.goal_repo.delete_goal(goal_id_to_delete)
    }
}
