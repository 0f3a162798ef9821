pub mod notifications_errors;
pub mod notifications_model;
pub mod notifications_repository;
pub mod notifications_service;
pub mod notifications_traits;

pub use notifications_errors::{NotificationError, Result};
pub use notifications_model::{
    NewNotification, Notification, KIND_CONTRIBUTION, KIND_GOAL_ACHIEVED, KIND_MILESTONE,
};
pub use notifications_repository::NotificationRepository;
pub use notifications_service::NotificationService;
pub use notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
