use serde::{Deserialize, Serialize};

/// Discrete growth phase of the visualized plant, derived solely from the
/// savings-progress percentage. Ordering follows growth: a higher percentage
/// never maps to an earlier stage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum PlantStage {
    Seed,
    Sprout,
    Small,
    Medium,
    Large,
    Flowering,
    Fruiting,
}

impl PlantStage {
    /// Maps a progress percentage to a growth stage. Bands are
    /// left-inclusive; values above 100 stay at `Fruiting` (over-funded
    /// goals are not an error).
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p < 10.0 => PlantStage::Seed,
            p if p < 25.0 => PlantStage::Sprout,
            p if p < 50.0 => PlantStage::Small,
            p if p < 75.0 => PlantStage::Medium,
            p if p < 95.0 => PlantStage::Large,
            p if p < 100.0 => PlantStage::Flowering,
            _ => PlantStage::Fruiting,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStage::Seed => "seed",
            PlantStage::Sprout => "sprout",
            PlantStage::Small => "small",
            PlantStage::Medium => "medium",
            PlantStage::Large => "large",
            PlantStage::Flowering => "flowering",
            PlantStage::Fruiting => "fruiting",
        }
    }
}

/// Selector for the color palette applied to the visualization. Does not
/// affect stage thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PlantType {
    #[default]
    Sunflower,
    Rose,
    Tulip,
    Daisy,
}

impl PlantType {
    /// Parses a plant-type selector permissively: unrecognized or missing
    /// values fall back to the default (sunflower).
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("sunflower") => PlantType::Sunflower,
            Some("rose") => PlantType::Rose,
            Some("tulip") => PlantType::Tulip,
            Some("daisy") => PlantType::Daisy,
            _ => PlantType::Sunflower,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Sunflower => "sunflower",
            PlantType::Rose => "rose",
            PlantType::Tulip => "tulip",
            PlantType::Daisy => "daisy",
        }
    }
}

/// Rendering parameters derived from a progress percentage and a plant type.
/// Consumed by the presentation layer; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantVisual {
    pub stage: PlantStage,
    /// Percent of the container height, floored at 5 so the seed stays visible.
    pub plant_height: f64,
    pub stem_height: f64,
    pub leaf_count: u32,
    /// Bloom color selected by the plant type.
    pub color: String,
    /// 8 when the plant has bloomed, 0 before.
    pub petal_count: u32,
    pub has_fruit: bool,
}

impl PlantVisual {
    /// Angles (degrees) at which petals are drawn, evenly spaced around the
    /// bloom center. Empty before the flowering stage.
    pub fn petal_angles(&self) -> Vec<f64> {
        (0..self.petal_count)
            .map(|i| i as f64 * crate::plant::plant_visual::PETAL_SPACING_DEGREES)
            .collect()
    }
}
