use rand::{Rng, RngCore};

use sylva_blocks::{Block, BlockRegistry, LogAxis, Material};
use sylva_world::{BlockPos, WorldView};

use crate::placement;
use crate::species::{SpeciesBlocks, TreeSpecies};

/// Default growth: validate, then emit canopy and trunk through the
/// callback. All checks run before the first emission, so a false return
/// means zero callback invocations.
pub fn grow_default<S: TreeSpecies + ?Sized>(
    species: &S,
    world: &dyn WorldView,
    reg: &BlockRegistry,
    blocks: &SpeciesBlocks,
    origin: BlockPos,
    rng: &mut dyn RngCore,
    on_place: &mut dyn FnMut(BlockPos, Block),
) -> bool {
    let min_height = species.min_trunk_height(rng);
    if !placement::can_place(world, reg, species, origin, min_height) {
        return false;
    }
    generate_canopy(world, reg, blocks, origin, min_height, rng, on_place);
    generate_trunk(world, reg, blocks, origin, min_height, on_place);
    true
}

/// Layered square canopy with corner thinning. Layer index runs from -3 at
/// the lowest foliage band to 0 at the apex; truncating division gives the
/// radius sequence 2, 2, 1, 1 bottom to top.
fn generate_canopy(
    world: &dyn WorldView,
    reg: &BlockRegistry,
    blocks: &SpeciesBlocks,
    origin: BlockPos,
    trunk_height: i32,
    rng: &mut dyn RngCore,
    on_place: &mut dyn FnMut(BlockPos, Block),
) {
    let top = origin.y + trunk_height;
    for y in (origin.y - 3 + trunk_height)..=top {
        let layer = y - top;
        let radius = 1 - layer / 2;
        for x in (origin.x - radius)..=(origin.x + radius) {
            let dx = x - origin.x;
            for z in (origin.z - radius)..=(origin.z + radius) {
                let dz = z - origin.z;
                let corner = dx.abs() == radius && dz.abs() == radius;
                // Corners never survive on the apex layer; elsewhere half do.
                if corner && (layer == 0 || rng.random_range(0..2) == 0) {
                    continue;
                }
                let p = BlockPos::new(x, y, z);
                if reg.material_of(world.block_at(p)).replaceable_by_leaves() {
                    on_place(p, blocks.leaves);
                }
            }
        }
    }
}

/// Vertical log run from the origin. Only air and foliage cells take a
/// log; anything else is left standing.
fn generate_trunk(
    world: &dyn WorldView,
    reg: &BlockRegistry,
    blocks: &SpeciesBlocks,
    origin: BlockPos,
    trunk_height: i32,
    on_place: &mut dyn FnMut(BlockPos, Block),
) {
    let log = blocks.log.with_state(LogAxis::Y.state());
    for step in 0..trunk_height {
        let p = origin.up(step);
        let material = reg.material_of(world.block_at(p));
        if matches!(material, Material::Air | Material::Leaves) {
            on_place(p, log);
        }
    }
}
