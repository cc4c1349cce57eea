//! Procedural tree generation: species, placement validation, shape
//! growth, spawn gating, and growth statistics.
#![forbid(unsafe_code)]

pub mod gating;
pub mod growth;
pub mod placement;
pub mod set;
pub mod species;
pub mod stats;

pub use gating::{
    BiomeCondition, ClimateRange, NamedBiome, SpeciesNoise, WeightedSpecies, chunk_density,
};
pub use placement::can_place;
pub use set::SpeciesSet;
pub use species::{Cherry, Oak, SpeciesBlocks, Spruce, TreeSpecies};
pub use stats::{GrowthReport, GrowthStats, REPORT_INTERVAL};
