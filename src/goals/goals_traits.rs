use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::goals_model::{Goal, GoalProgress, NewGoal};
use crate::goals::Result;

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_by_id(&self, goal_id: &str) -> Result<Goal>;
    fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn insert_new_goal_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        new_goal: NewGoal,
    ) -> Result<Goal>;
    fn update_goal(&self, goal_update: Goal) -> Result<Goal>;
    fn delete_goal(&self, goal_id_to_delete: &str) -> Result<usize>;
    /// Adds a contribution amount to the goal's running total inside an
    /// enclosing transaction, flipping `is_achieved` when the target is met.
    fn apply_contribution_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        goal_id: &str,
        amount: f64,
    ) -> Result<Goal>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn get_progress(&self, goal_id: &str) -> Result<GoalProgress>;
    async fn create_goal(&self, new_goal: NewGoal) -> crate::errors::Result<Goal>;
    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: &str) -> Result<usize>;
}
