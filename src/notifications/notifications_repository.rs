use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::notifications::notifications_errors::{NotificationError, Result};
use crate::notifications::notifications_model::{NewNotification, Notification};
use crate::notifications::notifications_traits::NotificationRepositoryTrait;
use crate::schema::notifications;
use crate::schema::notifications::dsl::*;

pub struct NotificationRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl NotificationRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        NotificationRepository { pool }
    }
}

impl NotificationRepositoryTrait for NotificationRepository {
    fn insert(&self, new_notification: NewNotification) -> Result<Notification> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;
        self.insert_in_transaction(&mut conn, new_notification)
    }

    fn insert_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        mut new_notification: NewNotification,
    ) -> Result<Notification> {
        new_notification.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(notifications::table)
            .values(&new_notification)
            .returning(notifications::all_columns)
            .get_result(conn)?)
    }

    fn list_for_user(&self, notification_user_id: &str, unread_only: bool) -> Result<Vec<Notification>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;

        let mut query = notifications::table
            .into_boxed()
            .filter(user_id.eq(notification_user_id));

        if unread_only {
            query = query.filter(is_read.eq(false));
        }

        Ok(query
            .order(created_at.desc())
            .load::<Notification>(&mut conn)?)
    }

    fn mark_read(&self, notification_id: &str) -> Result<Notification> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(notifications.find(notification_id))
            .set(is_read.eq(true))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(NotificationError::NotFound(format!(
                "Notification with id {} not found",
                notification_id
            )));
        }

        Ok(notifications.find(notification_id).first(&mut conn)?)
    }

    fn mark_all_read(&self, notification_user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;

        Ok(diesel::update(
            notifications
                .filter(user_id.eq(notification_user_id))
                .filter(is_read.eq(false)),
        )
        .set(is_read.eq(true))
        .execute(&mut conn)?)
    }

    fn purge_older_than(&self, cutoff: NaiveDateTime) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;

        Ok(diesel::delete(notifications.filter(created_at.lt(cutoff)))
            .execute(&mut conn)?)
    }
}
