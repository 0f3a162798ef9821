pub mod milestones_errors;
pub mod milestones_model;
pub mod milestones_repository;
pub mod milestones_service;
pub mod milestones_traits;

pub use milestones_errors::{MilestoneError, Result};
pub use milestones_model::{Milestone, NewMilestone, DEFAULT_MILESTONES};
pub use milestones_repository::MilestoneRepository;
pub use milestones_service::MilestoneService;
pub use milestones_traits::MilestoneRepositoryTrait;
