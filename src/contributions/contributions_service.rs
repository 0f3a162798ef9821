use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::contributions_model::{
    ContributionOutcome, NewContribution, SOURCE_LINK,
};
use super::contributions_repository::ContributionRepository;
use crate::contributions::contributions_model::Contribution;
use crate::contributions::contributions_traits::{
    ContributionRepositoryTrait, ContributionServiceTrait,
};
use crate::db::get_connection;
use crate::errors::Error;
use crate::goals::GoalRepository;
use crate::links::{ShareLink, ShareLinkRepository};
use crate::milestones::MilestoneRepository;
use crate::notifications::{
    NewNotification, NotificationRepository, NotificationRepositoryTrait, KIND_CONTRIBUTION,
    KIND_GOAL_ACHIEVED, KIND_MILESTONE,
};

/// Service for recording contributions. A contribution touches several
/// tables at once (the contribution row, the goal's running total, crossed
/// milestones, the owner's notifications, the share link's use counter), so
/// everything happens in a single transaction.
pub struct ContributionService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ContributionService {
    /// Creates a new ContributionService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    fn record(
        &self,
        new_contribution: NewContribution,
        via_link: Option<&ShareLink>,
    ) -> crate::errors::Result<ContributionOutcome> {
        debug!(
            "Recording contribution..., goal_id: {}, amount: {}, source: {}",
            new_contribution.goal_id, new_contribution.amount, new_contribution.source
        );

        let contribution_repo = ContributionRepository::new(self.pool.clone());
        let goal_repo = GoalRepository::new(self.pool.clone());
        let milestone_repo = MilestoneRepository::new(self.pool.clone());
        let notification_repo = NotificationRepository::new(self.pool.clone());
        let link_repo = ShareLinkRepository::new(self.pool.clone());

        let contributor_label = new_contribution.contributor_label();

        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<ContributionOutcome, Error, _>(|tx_conn| {
            let goal_before =
                goal_repo.get_by_id_in_transaction(tx_conn, &new_contribution.goal_id)?;

            let contribution =
                contribution_repo.insert_in_transaction(tx_conn, new_contribution)?;

            let goal = goal_repo.apply_contribution_in_transaction(
                tx_conn,
                &contribution.goal_id,
                contribution.amount,
            )?;
            let percentage = goal.progress_percentage();
            let goal_newly_achieved = goal.is_achieved && !goal_before.is_achieved;

            let awarded_milestones =
                milestone_repo.award_up_to_in_transaction(tx_conn, &goal.id, percentage)?;

            if let Some(link) = via_link {
                // The pre-transaction check read an older snapshot; a rival
                // contribution may have spent the last use since. Re-validate
                // against the row this transaction sees before counting the use.
                let current = link_repo.find_by_token_with_conn(tx_conn, &link.token)?;
                current.ensure_usable(chrono::Utc::now().naive_utc())?;
                link_repo.record_use_in_transaction(tx_conn, &current.id)?;
            }

            notification_repo.insert_in_transaction(
                tx_conn,
                NewNotification {
                    id: None,
                    user_id: goal.user_id.clone(),
                    kind: KIND_CONTRIBUTION.to_string(),
                    title: "New contribution".to_string(),
                    body: format!(
                        "{} added {:.2} to \"{}\"",
                        contributor_label, contribution.amount, goal.name
                    ),
                },
            )?;

            for milestone in &awarded_milestones {
                notification_repo.insert_in_transaction(
                    tx_conn,
                    NewNotification {
                        id: None,
                        user_id: goal.user_id.clone(),
                        kind: KIND_MILESTONE.to_string(),
                        title: format!("{:.0}% milestone reached", milestone.percentage),
                        body: milestone.message.clone(),
                    },
                )?;
            }

            if goal_newly_achieved {
                notification_repo.insert_in_transaction(
                    tx_conn,
                    NewNotification {
                        id: None,
                        user_id: goal.user_id.clone(),
                        kind: KIND_GOAL_ACHIEVED.to_string(),
                        title: "Goal achieved!".to_string(),
                        body: format!("\"{}\" is fully funded.", goal.name),
                    },
                )?;
            }

            Ok(ContributionOutcome {
                contribution,
                goal,
                percentage,
                awarded_milestones,
                goal_newly_achieved,
            })
        })
    }
}

#[async_trait]
impl ContributionServiceTrait for ContributionService {
    async fn record_contribution(
        &self,
        new_contribution: NewContribution,
    ) -> crate::errors::Result<ContributionOutcome> {
        self.record(new_contribution, None)
    }

    async fn record_link_contribution(
        &self,
        token: &str,
        contributor_name: String,
        amount: f64,
        note: Option<String>,
    ) -> crate::errors::Result<ContributionOutcome> {
        let link_repo = ShareLinkRepository::new(self.pool.clone());
        let link = link_repo.find_by_token(token)?;
        link.ensure_usable(chrono::Utc::now().naive_utc())?;

        let new_contribution = NewContribution {
            id: None,
            goal_id: link.goal_id.clone(),
            contributor_user_id: None,
            contributor_name: Some(contributor_name),
            amount,
            note,
            source: SOURCE_LINK.to_string(),
        };

        self.record(new_contribution, Some(&link))
    }

    fn get_contributions(&self, goal_id: &str) -> crate::contributions::Result<Vec<Contribution>> {
        let repo = ContributionRepository::new(self.pool.clone());
        repo.list_for_goal(goal_id)
    }
}
