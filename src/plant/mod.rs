// Module declarations
pub(crate) mod plant_model;
pub(crate) mod plant_visual;

// Re-export the public interface
pub use plant_model::{PlantStage, PlantType, PlantVisual};
pub use plant_visual::{visual_for, PETAL_COUNT, PETAL_SPACING_DEGREES};
