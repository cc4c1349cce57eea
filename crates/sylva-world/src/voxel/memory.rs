use std::collections::HashMap;

use sylva_blocks::Block;

use super::{BlockPos, WorldView};

/// Sparse in-memory world: explicit edits over a uniform flat ground slab.
/// Everything below `ground_height` reads as the ground block, everything
/// above as air, unless an edit overrides it.
pub struct MemoryWorld {
    edits: HashMap<BlockPos, Block>,
    ground: Block,
    ground_height: i32,
    max_height: i32,
}

impl MemoryWorld {
    pub fn flat(ground: Block, ground_height: i32, max_height: i32) -> Self {
        Self {
            edits: HashMap::new(),
            ground,
            ground_height,
            max_height,
        }
    }

    #[inline]
    pub fn ground_height(&self) -> i32 {
        self.ground_height
    }

    pub fn set(&mut self, pos: BlockPos, block: Block) {
        self.edits.insert(pos, block);
    }

    /// Explicit edits only; the implicit slab is not materialized.
    pub fn edit_at(&self, pos: BlockPos) -> Option<Block> {
        self.edits.get(&pos).copied()
    }

    pub fn snapshot_edits(&self) -> Vec<(BlockPos, Block)> {
        self.edits.iter().map(|(k, v)| (*k, *v)).collect()
    }
}

impl WorldView for MemoryWorld {
    fn block_at(&self, pos: BlockPos) -> Block {
        if let Some(b) = self.edits.get(&pos) {
            return *b;
        }
        if pos.y < self.ground_height {
            self.ground
        } else {
            Block::AIR
        }
    }

    fn max_height(&self) -> i32 {
        self.max_height
    }
}
