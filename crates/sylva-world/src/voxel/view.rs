use sylva_blocks::Block;

use super::BlockPos;

/// Read-only world query capability consumed by generation. Callers own
/// mutation; generators only read and emit placements through callbacks.
pub trait WorldView {
    fn block_at(&self, pos: BlockPos) -> Block;

    /// Exclusive upper bound on buildable y.
    fn max_height(&self) -> i32;
}
