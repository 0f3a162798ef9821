pub mod contributions_errors;
pub mod contributions_model;
pub mod contributions_repository;
pub mod contributions_service;
pub mod contributions_traits;

pub use contributions_errors::{ContributionError, Result};
pub use contributions_model::{
    Contribution, ContributionOutcome, NewContribution, SOURCE_LINK, SOURCE_MEMBER,
};
pub use contributions_repository::ContributionRepository;
pub use contributions_service::ContributionService;
pub use contributions_traits::{ContributionRepositoryTrait, ContributionServiceTrait};
