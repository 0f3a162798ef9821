use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::links::links_errors::{LinkError, Result};
use crate::links::links_model::{NewShareLink, ShareLink, ShareLinkRow};
use crate::schema::share_links;
use crate::schema::share_links::dsl::*;

pub struct ShareLinkRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ShareLinkRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        ShareLinkRepository { pool }
    }

    pub fn create(&self, new_link: NewShareLink) -> Result<ShareLink> {
        new_link.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        let row = ShareLinkRow {
            id: Uuid::new_v4().to_string(),
            goal_id: new_link.goal_id,
            token: Uuid::new_v4().to_string(),
            expires_at: new_link.expires_at,
            max_uses: new_link.max_uses,
            use_count: 0,
            is_revoked: false,
        };

        Ok(diesel::insert_into(share_links::table)
            .values(&row)
            .returning(share_links::all_columns)
            .get_result(&mut conn)?)
    }

    pub fn find_by_token(&self, link_token: &str) -> Result<ShareLink> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;
        self.find_by_token_with_conn(&mut conn, link_token)
    }

    pub fn find_by_token_with_conn(
        &self,
        conn: &mut SqliteConnection,
        link_token: &str,
    ) -> Result<ShareLink> {
        share_links
            .filter(token.eq(link_token))
            .first::<ShareLink>(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    LinkError::NotFound(format!("No share link for token {}", link_token))
                }
                _ => LinkError::DatabaseError(e.to_string()),
            })
    }

    pub fn list_for_goal(&self, link_goal_id: &str) -> Result<Vec<ShareLink>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;
        Ok(share_links
            .filter(goal_id.eq(link_goal_id))
            .order(created_at.asc())
            .load::<ShareLink>(&mut conn)?)
    }

    pub fn revoke(&self, link_id: &str) -> Result<ShareLink> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| LinkError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(share_links.find(link_id))
            .set(is_revoked.eq(true))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(LinkError::NotFound(format!(
                "Share link with id {} not found",
                link_id
            )));
        }

        Ok(share_links.find(link_id).first(&mut conn)?)
    }

    /// Bumps the use counter inside an enclosing transaction, once the
    /// contribution it covers has been recorded. The update itself refuses
    /// to move the counter past `max_uses` or touch a revoked link, so the
    /// counter invariant holds even if callers raced past the usability check.
    pub fn record_use_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        link_id: &str,
    ) -> Result<()> {
        let affected = diesel::update(
            share_links
                .find(link_id)
                .filter(is_revoked.eq(false))
                .filter(max_uses.is_null().or(use_count.nullable().lt(max_uses))),
        )
        .set(use_count.eq(use_count + 1))
        .execute(conn)?;

        if affected == 0 {
            let link: ShareLink = share_links.find(link_id).first(conn)?;
            link.ensure_usable(chrono::Utc::now().naive_utc())?;
            return Err(LinkError::Exhausted(link.token));
        }

        Ok(())
    }
}
