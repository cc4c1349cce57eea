use rand::{Rng, RngCore};

use sylva_blocks::{Block, BlockRegistry};
use sylva_world::{BlockPos, WorldView};

use crate::species::{SpeciesBlocks, TreeSpecies};

/// Orchard species: planted and harvested, never spreads on its own.
/// One fruit drop in twenty, fixed tint, no natural growth at all.
pub struct Cherry;

impl TreeSpecies for Cherry {
    fn name(&self) -> &str {
        "cherry"
    }

    fn seed(&self) -> i32 {
        2
    }

    fn canopy_radius(&self, _height: i32, _trunk_height: i32) -> i32 {
        0
    }

    fn fruit(&self, rng: &mut dyn RngCore) -> Option<&'static str> {
        (rng.random_range(0..20) == 0).then_some("cherry")
    }

    fn leaf_tint(&self) -> [f32; 3] {
        [0.53, 0.66, 0.17]
    }

    fn grow(
        &self,
        _world: &dyn WorldView,
        _reg: &BlockRegistry,
        _blocks: &SpeciesBlocks,
        _origin: BlockPos,
        _rng: &mut dyn RngCore,
        _on_place: &mut dyn FnMut(BlockPos, Block),
    ) -> bool {
        false
    }
}
