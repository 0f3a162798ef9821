use lazy_static::lazy_static;
use std::collections::HashMap;

use super::plant_model::{PlantStage, PlantType, PlantVisual};

/// Number of petals drawn once the plant reaches the flowering stage.
pub const PETAL_COUNT: u32 = 8;
/// Petals are evenly spaced around the bloom center.
pub const PETAL_SPACING_DEGREES: f64 = 45.0;

lazy_static! {
    static ref BLOOM_COLORS: HashMap<PlantType, &'static str> = {
        let mut m = HashMap::new();
        m.insert(PlantType::Sunflower, "#FFD700");
        m.insert(PlantType::Rose, "#E8506E");
        m.insert(PlantType::Tulip, "#FF6347");
        m.insert(PlantType::Daisy, "#FFF8E7");
        m
    };
}

/// Derives the full set of rendering parameters for a savings goal's plant.
///
/// Total over all inputs: negative percentages behave as `Seed`, values above
/// 100 stay unclamped and render as `Fruiting`, and unrecognized plant types
/// fall back to the sunflower palette. Pure and side-effect free; safe to
/// recompute on every read.
pub fn visual_for(percentage: f64, plant_type: Option<&str>) -> PlantVisual {
    let stage = PlantStage::from_percentage(percentage);
    let plant_type = PlantType::from_selector(plant_type);

    // Floor of 5 keeps the seed visible in an empty pot.
    let plant_height = (percentage * 0.8).max(5.0);
    let stem_height = (plant_height * 0.6).max(10.0);
    let leaf_count = (percentage.max(0.0) / 20.0).floor() as u32;

    PlantVisual {
        stage,
        plant_height,
        stem_height,
        leaf_count,
        color: bloom_color(plant_type).to_string(),
        petal_count: if stage >= PlantStage::Flowering {
            PETAL_COUNT
        } else {
            0
        },
        has_fruit: stage == PlantStage::Fruiting,
    }
}

/// Fixed bloom color lookup by plant type.
pub fn bloom_color(plant_type: PlantType) -> &'static str {
    BLOOM_COLORS
        .get(&plant_type)
        .copied()
        .unwrap_or(BLOOM_COLORS[&PlantType::Sunflower])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_bands() {
        assert_eq!(PlantStage::from_percentage(-5.0), PlantStage::Seed);
        assert_eq!(PlantStage::from_percentage(0.0), PlantStage::Seed);
        assert_eq!(PlantStage::from_percentage(9.99), PlantStage::Seed);
        assert_eq!(PlantStage::from_percentage(10.0), PlantStage::Sprout);
        assert_eq!(PlantStage::from_percentage(24.9), PlantStage::Sprout);
        assert_eq!(PlantStage::from_percentage(25.0), PlantStage::Small);
        assert_eq!(PlantStage::from_percentage(49.99), PlantStage::Small);
        assert_eq!(PlantStage::from_percentage(50.0), PlantStage::Medium);
        assert_eq!(PlantStage::from_percentage(74.99), PlantStage::Medium);
        assert_eq!(PlantStage::from_percentage(75.0), PlantStage::Large);
        assert_eq!(PlantStage::from_percentage(94.99), PlantStage::Large);
        assert_eq!(PlantStage::from_percentage(95.0), PlantStage::Flowering);
        assert_eq!(PlantStage::from_percentage(99.99), PlantStage::Flowering);
        assert_eq!(PlantStage::from_percentage(100.0), PlantStage::Fruiting);
        assert_eq!(PlantStage::from_percentage(150.0), PlantStage::Fruiting);
    }

    #[test]
    fn test_stage_monotonic_in_percentage() {
        let mut previous = PlantStage::from_percentage(-10.0);
        let mut p = -10.0;
        while p <= 130.0 {
            let stage = PlantStage::from_percentage(p);
            assert!(
                stage >= previous,
                "stage regressed at {}%: {:?} -> {:?}",
                p,
                previous,
                stage
            );
            previous = stage;
            p += 0.25;
        }
    }

    #[test]
    fn test_leaf_count_steps() {
        assert_eq!(visual_for(0.0, None).leaf_count, 0);
        assert_eq!(visual_for(19.99, None).leaf_count, 0);
        assert_eq!(visual_for(20.0, None).leaf_count, 1);
        assert_eq!(visual_for(100.0, None).leaf_count, 5);
        assert_eq!(visual_for(150.0, None).leaf_count, 7);
        // Negative progress never underflows the count
        assert_eq!(visual_for(-40.0, None).leaf_count, 0);

        let mut previous = 0;
        for p in 0..200 {
            let count = visual_for(p as f64, None).leaf_count;
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_height_floors() {
        for p in [-20.0, 0.0, 3.0, 6.25, 12.5, 50.0, 100.0, 250.0] {
            let visual = visual_for(p, None);
            assert!(visual.plant_height >= 5.0, "plant height floor at {}%", p);
            assert!(visual.stem_height >= 10.0, "stem height floor at {}%", p);
        }
        // Above the floors the heights scale linearly
        let visual = visual_for(100.0, None);
        assert_eq!(visual.plant_height, 80.0);
        assert_eq!(visual.stem_height, 48.0);
    }

    #[test]
    fn test_unknown_plant_type_falls_back_to_default() {
        let default = visual_for(50.0, None);
        let cactus = visual_for(50.0, Some("cactus"));
        assert_eq!(cactus.color, default.color);
        assert_eq!(default.color, bloom_color(PlantType::Sunflower));
    }

    #[test]
    fn test_each_plant_type_has_its_own_color() {
        let rose = bloom_color(PlantType::Rose);
        let tulip = bloom_color(PlantType::Tulip);
        let daisy = bloom_color(PlantType::Daisy);
        let sunflower = bloom_color(PlantType::Sunflower);
        assert_ne!(rose, sunflower);
        assert_ne!(tulip, sunflower);
        assert_ne!(daisy, sunflower);
        assert_ne!(rose, tulip);
    }

    #[test]
    fn test_empty_goal_shows_a_seed() {
        let visual = visual_for(0.0, None);
        assert_eq!(visual.stage, PlantStage::Seed);
        assert_eq!(visual.leaf_count, 0);
        assert_eq!(visual.plant_height, 5.0);
        assert_eq!(visual.petal_count, 0);
        assert!(!visual.has_fruit);
        assert!(visual.petal_angles().is_empty());
    }

    #[test]
    fn test_sprout_to_small_boundary() {
        assert_eq!(visual_for(24.9, None).stage, PlantStage::Sprout);
        assert_eq!(visual_for(25.0, None).stage, PlantStage::Small);
    }

    #[test]
    fn test_flowering_renders_petals() {
        let visual = visual_for(95.0, None);
        assert_eq!(visual.stage, PlantStage::Flowering);
        assert_eq!(visual.petal_count, PETAL_COUNT);
        assert!(!visual.has_fruit);

        let angles = visual.petal_angles();
        assert_eq!(angles.len(), 8);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[1], 45.0);
        assert_eq!(angles[7], 315.0);
    }

    #[test]
    fn test_fruiting_renders_fruit_marker() {
        let visual = visual_for(100.0, None);
        assert_eq!(visual.stage, PlantStage::Fruiting);
        assert!(visual.has_fruit);
    }

    #[test]
    fn test_overfunded_rose_goal() {
        let visual = visual_for(150.0, Some("rose"));
        assert_eq!(visual.stage, PlantStage::Fruiting);
        assert_eq!(visual.color, bloom_color(PlantType::Rose));
        assert_eq!(visual.leaf_count, 7);
    }

    #[test]
    fn test_same_input_same_output() {
        assert_eq!(visual_for(42.0, Some("tulip")), visual_for(42.0, Some("tulip")));
    }
}
