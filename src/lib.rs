pub mod db;

pub mod contributions;
pub mod goals;
pub mod links;
pub mod milestones;
pub mod notifications;
pub mod plant;
pub mod users;

pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
pub use plant::{PlantStage, PlantType, PlantVisual};
