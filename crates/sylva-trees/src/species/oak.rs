use crate::gating::{BiomeCondition, WeightedSpecies};
use crate::species::TreeSpecies;

/// Broadleaf baseline: trait-default trunk height, clearance, and shape.
pub struct Oak {
    conditions: Vec<Box<dyn BiomeCondition>>,
}

impl Oak {
    pub fn new() -> Self {
        Self {
            conditions: vec![Box::new(WeightedSpecies::new("oak"))],
        }
    }
}

impl Default for Oak {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeSpecies for Oak {
    fn name(&self) -> &str {
        "oak"
    }

    fn seed(&self) -> i32 {
        0
    }

    fn biome_conditions(&self) -> &[Box<dyn BiomeCondition>] {
        &self.conditions
    }
}
