use fastnoise_lite::{FastNoiseLite, NoiseType};

use sylva_world::BiomeSample;

/// Frequency of the spawn field in chunk coordinates.
const CHUNK_FREQ: f32 = 0.05;

/// Per-species 2D spawn-strength field, bound to one world. Rebinding on a
/// world change constructs a fresh sampler; nothing mutates in place.
pub struct SpeciesNoise {
    field: FastNoiseLite,
}

impl SpeciesNoise {
    pub fn bind(world_seed: i32, species_seed: i32) -> Self {
        let mut field = FastNoiseLite::with_seed(world_seed.wrapping_add(species_seed));
        field.set_noise_type(Some(NoiseType::OpenSimplex2));
        field.set_frequency(Some(CHUNK_FREQ));
        Self { field }
    }

    /// Spawn strength for a chunk, in [-1, 1].
    pub fn strength(&self, chunk_x: i32, chunk_z: i32) -> f32 {
        self.field.get_noise_2d(chunk_x as f32, chunk_z as f32)
    }
}

/// Biome-applicability gate for natural spawning. A species carries zero
/// or more of these; any accepting condition admits the chunk.
pub trait BiomeCondition {
    fn allows(&self, sample: &BiomeSample<'_>) -> bool;

    /// Attempt density when admitted, before noise scaling.
    fn density(&self, _sample: &BiomeSample<'_>) -> f32 {
        1.0
    }
}

/// Admits a biome by exact name, at the biome's configured tree density.
pub struct NamedBiome {
    name: String,
}

impl NamedBiome {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl BiomeCondition for NamedBiome {
    fn allows(&self, sample: &BiomeSample<'_>) -> bool {
        sample.def.name == self.name
    }

    fn density(&self, sample: &BiomeSample<'_>) -> f32 {
        sample.def.tree_density.unwrap_or(1.0)
    }
}

/// Admits biomes whose sampled climate falls inside a half-open window.
pub struct ClimateRange {
    pub temp_min: f32,
    pub temp_max: f32,
    pub moisture_min: f32,
    pub moisture_max: f32,
}

impl Default for ClimateRange {
    fn default() -> Self {
        Self {
            temp_min: 0.0,
            temp_max: 1.0,
            moisture_min: 0.0,
            moisture_max: 1.0,
        }
    }
}

impl BiomeCondition for ClimateRange {
    fn allows(&self, sample: &BiomeSample<'_>) -> bool {
        sample.temp >= self.temp_min
            && sample.temp < self.temp_max
            && sample.moisture >= self.moisture_min
            && sample.moisture < self.moisture_max
    }
}

/// Admits biomes that list the species in their weight table; density is
/// the listed weight scaled by the biome's tree density.
pub struct WeightedSpecies {
    species: String,
}

impl WeightedSpecies {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }
}

impl BiomeCondition for WeightedSpecies {
    fn allows(&self, sample: &BiomeSample<'_>) -> bool {
        sample.def.species_weights.contains_key(&self.species)
    }

    fn density(&self, sample: &BiomeSample<'_>) -> f32 {
        let weight = sample
            .def
            .species_weights
            .get(&self.species)
            .copied()
            .unwrap_or(0.0);
        weight * sample.def.tree_density.unwrap_or(1.0)
    }
}

/// Combined chunk gate: the strongest admitted density scaled by the
/// species' normalized spawn strength, or None when no condition admits
/// the biome (or the species carries no conditions at all).
pub fn chunk_density(
    noise: &SpeciesNoise,
    conditions: &[Box<dyn BiomeCondition>],
    sample: &BiomeSample<'_>,
    chunk_x: i32,
    chunk_z: i32,
) -> Option<f32> {
    let mut best: Option<f32> = None;
    for cond in conditions {
        if cond.allows(sample) {
            let d = cond.density(sample);
            best = Some(best.map_or(d, |b: f32| b.max(d)));
        }
    }
    let strength = (noise.strength(chunk_x, chunk_z) + 1.0) * 0.5;
    best.map(|d| (d * strength).clamp(0.0, 1.0))
}
