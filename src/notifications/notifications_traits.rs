use chrono::NaiveDateTime;
use diesel::sqlite::SqliteConnection;

use super::notifications_model::{NewNotification, Notification};
use crate::notifications::Result;

/// Trait for notification repository operations
pub trait NotificationRepositoryTrait: Send + Sync {
    fn insert(&self, new_notification: NewNotification) -> Result<Notification>;
    fn insert_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        new_notification: NewNotification,
    ) -> Result<Notification>;
    fn list_for_user(&self, user_id: &str, unread_only: bool) -> Result<Vec<Notification>>;
    fn mark_read(&self, notification_id: &str) -> Result<Notification>;
    fn mark_all_read(&self, user_id: &str) -> Result<usize>;
    /// Retention sweep: drops notifications created before the cutoff.
    fn purge_older_than(&self, cutoff: NaiveDateTime) -> Result<usize>;
}

/// Trait for notification service operations
pub trait NotificationServiceTrait: Send + Sync {
    fn notify(&self, new_notification: NewNotification) -> Result<Notification>;
    fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;
    fn get_unread(&self, user_id: &str) -> Result<Vec<Notification>>;
    fn mark_read(&self, notification_id: &str) -> Result<Notification>;
    fn mark_all_read(&self, user_id: &str) -> Result<usize>;
    fn purge_older_than(&self, cutoff: NaiveDateTime) -> Result<usize>;
}
