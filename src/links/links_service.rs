use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::links_model::{NewShareLink, ShareLink};
use super::links_repository::ShareLinkRepository;
use crate::links::Result;

/// Service for shareable contribution links
pub struct ShareLinkService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ShareLinkService {
    /// Creates a new ShareLinkService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a share link for a goal and returns it, token included
    pub fn create_link(&self, new_link: NewShareLink) -> Result<ShareLink> {
        debug!(
            "Creating share link..., goal_id: {}, max_uses: {:?}",
            new_link.goal_id, new_link.max_uses
        );
        let repo = ShareLinkRepository::new(self.pool.clone());
        repo.create(new_link)
    }

    /// Resolves a token to its link, rejecting revoked, expired and
    /// exhausted links. Resolution never mutates the link; the use counter
    /// only moves when a contribution actually lands.
    pub fn resolve(&self, token: &str) -> Result<ShareLink> {
        let repo = ShareLinkRepository::new(self.pool.clone());
        let link = repo.find_by_token(token)?;
        link.ensure_usable(chrono::Utc::now().naive_utc())?;
        Ok(link)
    }

    /// Lists every link issued for a goal
    pub fn get_links(&self, goal_id: &str) -> Result<Vec<ShareLink>> {
        let repo = ShareLinkRepository::new(self.pool.clone());
        repo.list_for_goal(goal_id)
    }

    /// Revokes a link so its token stops working immediately
    pub fn revoke_link(&self, link_id: &str) -> Result<ShareLink> {
        let repo = ShareLinkRepository::new(self.pool.clone());
        repo.revoke(link_id)
    }
}
