//! World views, climate sampling, and forest worldgen parameters.
#![forbid(unsafe_code)]

pub mod climate;
pub mod voxel;
pub mod worldgen;

pub use climate::{BiomeSample, ClimateSampler};
pub use voxel::{BlockPos, MemoryWorld, WorldView};
pub use worldgen::{ForestConfig, ForestParams, load_params_from_path};
