mod cherry;
mod oak;
mod spruce;

pub use cherry::Cherry;
pub use oak::Oak;
pub use spruce::Spruce;

use std::error::Error;

use rand::{Rng, RngCore};

use sylva_blocks::{Block, BlockRegistry};
use sylva_world::{BlockPos, WorldView};

use crate::gating::BiomeCondition;
use crate::growth;

/// Placed states for one species, resolved once from the registry at
/// startup and cached for the process lifetime.
#[derive(Clone, Copy, Debug)]
pub struct SpeciesBlocks {
    pub leaves: Block,
    pub log: Block,
    pub sapling: Block,
}

impl SpeciesBlocks {
    /// Looks up `<name>_leaves`, `<name>_log`, `<name>_sapling`.
    pub fn resolve(reg: &BlockRegistry, name: &str) -> Result<Self, Box<dyn Error>> {
        let lookup = |suffix: &str| -> Result<Block, Box<dyn Error>> {
            let key = format!("{name}_{suffix}");
            reg.block_by_name(&key)
                .ok_or_else(|| format!("block '{key}' missing from registry").into())
        };
        Ok(Self {
            leaves: lookup("leaves")?,
            log: lookup("log")?,
            sapling: lookup("sapling")?,
        })
    }
}

/// One tree species. Everything a species can customize hangs off this
/// trait; the default methods encode the common broadleaf behavior.
pub trait TreeSpecies {
    /// Registry-facing name; block names derive from it.
    fn name(&self) -> &str;

    /// Seed index folded into the world seed for this species' spawn field.
    fn seed(&self) -> i32;

    /// Minimum trunk height for one growth attempt. The same value must
    /// feed both the validator and the generator within an attempt.
    fn min_trunk_height(&self, rng: &mut dyn RngCore) -> i32 {
        rng.random_range(0..3) + 5
    }

    /// Clearance radius required `height` layers above the origin for a
    /// trunk of `trunk_height`. The default covers the widest canopy
    /// layer the default shape can emit.
    fn canopy_radius(&self, height: i32, trunk_height: i32) -> i32 {
        if height >= trunk_height - 3 { 2 } else { 0 }
    }

    /// Fruit dropped by mature foliage, if any.
    fn fruit(&self, _rng: &mut dyn RngCore) -> Option<&'static str> {
        None
    }

    /// Foliage tint, linear RGB.
    fn leaf_tint(&self) -> [f32; 3] {
        [0.32, 0.58, 0.24]
    }

    /// Biome gates for natural worldgen spawning. Empty means the species
    /// never spawns through worldgen (planted only).
    fn biome_conditions(&self) -> &[Box<dyn BiomeCondition>] {
        &[]
    }

    /// Attempt natural growth at `origin`. Either returns false having
    /// invoked `on_place` zero times, or true having invoked it once per
    /// placed block. Never mutates the world directly.
    fn grow(
        &self,
        world: &dyn WorldView,
        reg: &BlockRegistry,
        blocks: &SpeciesBlocks,
        origin: BlockPos,
        rng: &mut dyn RngCore,
        on_place: &mut dyn FnMut(BlockPos, Block),
    ) -> bool {
        growth::grow_default(self, world, reg, blocks, origin, rng, on_place)
    }
}
