use diesel::sqlite::SqliteConnection;

use super::milestones_model::Milestone;
use crate::milestones::Result;

/// Trait for milestone repository operations
pub trait MilestoneRepositoryTrait: Send + Sync {
    /// Inserts the default reward checkpoints for a freshly created goal.
    fn seed_for_goal(&self, goal_id: &str) -> Result<Vec<Milestone>>;
    /// Same as `seed_for_goal`, inside an enclosing transaction so the goal
    /// and its checkpoints land (or roll back) together.
    fn seed_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        goal_id: &str,
    ) -> Result<Vec<Milestone>>;
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<Milestone>>;
    /// Marks every unachieved milestone at or below `percentage` as achieved
    /// and returns the newly awarded set. Idempotent: a milestone is only
    /// ever awarded once.
    fn award_up_to_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        goal_id: &str,
        percentage: f64,
    ) -> Result<Vec<Milestone>>;
}
