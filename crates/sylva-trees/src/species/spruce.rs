use rand::{Rng, RngCore};

use crate::gating::{BiomeCondition, ClimateRange, WeightedSpecies};
use crate::species::TreeSpecies;

/// Conifer: taller trunk, cold-climate spawning, darker foliage.
pub struct Spruce {
    conditions: Vec<Box<dyn BiomeCondition>>,
}

impl Spruce {
    pub fn new() -> Self {
        Self {
            conditions: vec![
                Box::new(WeightedSpecies::new("spruce")),
                Box::new(ClimateRange {
                    temp_max: 0.35,
                    ..ClimateRange::default()
                }),
            ],
        }
    }
}

impl Default for Spruce {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeSpecies for Spruce {
    fn name(&self) -> &str {
        "spruce"
    }

    fn seed(&self) -> i32 {
        1
    }

    fn min_trunk_height(&self, rng: &mut dyn RngCore) -> i32 {
        rng.random_range(0..4) + 6
    }

    fn leaf_tint(&self) -> [f32; 3] {
        [0.18, 0.36, 0.22]
    }

    fn biome_conditions(&self) -> &[Box<dyn BiomeCondition>] {
        &self.conditions
    }
}
