use sylva_blocks::BlockRegistry;
use sylva_world::{BlockPos, WorldView};

use crate::species::TreeSpecies;

/// Volumetric clearance and footing test for one growth attempt.
///
/// `min_trunk_height` must be the exact value later fed to the generator;
/// the clearance volume is computed from it.
pub fn can_place<S: TreeSpecies + ?Sized>(
    world: &dyn WorldView,
    reg: &BlockRegistry,
    species: &S,
    origin: BlockPos,
    min_trunk_height: i32,
) -> bool {
    if origin.y < 1 || origin.y + min_trunk_height + 1 > world.max_height() {
        return false;
    }
    for h in 0..=min_trunk_height + 1 {
        let radius = species.canopy_radius(h, min_trunk_height);
        for cx in (origin.x - radius)..=(origin.x + radius) {
            for cz in (origin.z - radius)..=(origin.z + radius) {
                let p = BlockPos::new(cx, origin.y + h, cz);
                if !reg.material_of(world.block_at(p)).can_grow_into() {
                    return false;
                }
            }
        }
    }
    reg.material_of(world.block_at(origin.down()))
        .sustains_sapling()
}
