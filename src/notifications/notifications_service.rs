use chrono::NaiveDateTime;
use log::info;
use std::sync::Arc;

use crate::notifications::notifications_model::{NewNotification, Notification};
use crate::notifications::notifications_traits::{
    NotificationRepositoryTrait, NotificationServiceTrait,
};
use crate::notifications::Result;

pub struct NotificationService<R: NotificationRepositoryTrait> {
    notification_repo: Arc<R>,
}

impl<R: NotificationRepositoryTrait> NotificationService<R> {
    pub fn new(notification_repo: Arc<R>) -> Self {
        NotificationService { notification_repo }
    }
}

impl<R: NotificationRepositoryTrait + Send + Sync> NotificationServiceTrait
    for NotificationService<R>
{
    fn notify(&self, new_notification: NewNotification) -> Result<Notification> {
        self.notification_repo.insert(new_notification)
    }

    fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.notification_repo.list_for_user(user_id, false)
    }

    fn get_unread(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.notification_repo.list_for_user(user_id, true)
    }

    fn mark_read(&self, notification_id: &str) -> Result<Notification> {
        self.notification_repo.mark_read(notification_id)
    }

    fn mark_all_read(&self, user_id: &str) -> Result<usize> {
        self.notification_repo.mark_all_read(user_id)
    }

    fn purge_older_than(&self, cutoff: NaiveDateTime) -> Result<usize> {
        let purged = self.notification_repo.purge_older_than(cutoff)?;
        if purged > 0 {
            info!("Purged {} notification(s) older than {}", purged, cutoff);
        }
        Ok(purged)
    }
}
