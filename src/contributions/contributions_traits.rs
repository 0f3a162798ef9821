use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::contributions_model::{Contribution, ContributionOutcome, NewContribution};
use crate::contributions::Result;

/// Trait for contribution repository operations
pub trait ContributionRepositoryTrait: Send + Sync {
    fn insert_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        new_contribution: NewContribution,
    ) -> Result<Contribution>;
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<Contribution>>;
    fn total_for_goal(&self, goal_id: &str) -> Result<f64>;
}

/// Trait for contribution service operations
#[async_trait]
pub trait ContributionServiceTrait: Send + Sync {
    /// Records a family member's contribution.
    async fn record_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> crate::errors::Result<ContributionOutcome>;
    /// Records an external contribution made through a share link token.
    async fn record_link_contribution(
        &self,
        token: &str,
        contributor_name: String,
        amount: f64,
        note: Option<String>,
    ) -> crate::errors::Result<ContributionOutcome>;
    fn get_contributions(&self, goal_id: &str) -> Result<Vec<Contribution>>;
}
