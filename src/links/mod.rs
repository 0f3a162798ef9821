pub mod links_errors;
pub mod links_model;
pub mod links_repository;
pub mod links_service;

pub use links_errors::{LinkError, Result};
pub use links_model::{NewShareLink, ShareLink};
pub use links_repository::ShareLinkRepository;
pub use links_service::ShareLinkService;
