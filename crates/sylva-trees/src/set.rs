use std::error::Error;

use rand::RngCore;

use sylva_blocks::{Block, BlockRegistry};
use sylva_world::{BlockPos, WorldView};

use crate::gating::SpeciesNoise;
use crate::species::{SpeciesBlocks, TreeSpecies};
use crate::stats::GrowthStats;

struct Entry {
    species: Box<dyn TreeSpecies>,
    blocks: Option<SpeciesBlocks>,
    noise: Option<SpeciesNoise>,
    stats: GrowthStats,
}

/// Owned species registry. Built once at startup by appending species,
/// then bound to a block registry and a world seed; the species list
/// itself never changes afterwards.
#[derive(Default)]
pub struct SpeciesSet {
    entries: Vec<Entry>,
}

impl SpeciesSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a species; returns its index.
    pub fn register(&mut self, species: Box<dyn TreeSpecies>) -> usize {
        self.entries.push(Entry {
            species,
            blocks: None,
            noise: None,
            stats: GrowthStats::new(),
        });
        self.entries.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn species(&self, idx: usize) -> Option<&dyn TreeSpecies> {
        self.entries.get(idx).map(|e| e.species.as_ref())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.species.name() == name)
    }

    pub fn blocks(&self, idx: usize) -> Option<&SpeciesBlocks> {
        self.entries.get(idx).and_then(|e| e.blocks.as_ref())
    }

    pub fn noise(&self, idx: usize) -> Option<&SpeciesNoise> {
        self.entries.get(idx).and_then(|e| e.noise.as_ref())
    }

    pub fn stats(&self, idx: usize) -> Option<&GrowthStats> {
        self.entries.get(idx).map(|e| &e.stats)
    }

    /// Resolve every species' placed states against the registry.
    pub fn bind_blocks(&mut self, reg: &BlockRegistry) -> Result<(), Box<dyn Error>> {
        for entry in &mut self.entries {
            entry.blocks = Some(SpeciesBlocks::resolve(reg, entry.species.name())?);
        }
        Ok(())
    }

    /// Bind every species' spawn field to a world seed. Must run again
    /// whenever the active world changes.
    pub fn bind_world(&mut self, world_seed: i32) {
        for entry in &mut self.entries {
            entry.noise = Some(SpeciesNoise::bind(world_seed, entry.species.seed()));
        }
    }

    /// Run one growth attempt, record it, and log the periodic report.
    pub fn grow(
        &mut self,
        idx: usize,
        world: &dyn WorldView,
        reg: &BlockRegistry,
        origin: BlockPos,
        rng: &mut dyn RngCore,
        on_place: &mut dyn FnMut(BlockPos, Block),
    ) -> bool {
        let Some(entry) = self.entries.get(idx) else {
            return false;
        };
        let Some(blocks) = entry.blocks else {
            return false;
        };
        let grew = entry
            .species
            .grow(world, reg, &blocks, origin, rng, on_place);
        let entry = &mut self.entries[idx];
        if let Some(report) = entry.stats.record(grew) {
            log::info!(
                "species {} took root in {:.2}% of {} attempts ({} grown)",
                entry.species.name(),
                report.percent,
                report.attempts,
                report.successes,
            );
        }
        grew
    }
}
