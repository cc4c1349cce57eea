use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
pub struct ForestConfig {
    #[serde(default)]
    pub trees: Trees,
    #[serde(default)]
    pub biomes: Biomes,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: Trees::default(),
            biomes: Biomes::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    /// Baseline per-chunk attempt probability when no biome overrides it.
    #[serde(default = "default_tree_prob")]
    pub probability: f32,
}

fn default_tree_prob() -> f32 {
    0.02
}

impl Default for Trees {
    fn default() -> Self {
        Self {
            probability: default_tree_prob(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct Biomes {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub temp: Climate2D,
    #[serde(default)]
    pub moisture: Climate2D,
    #[serde(default)]
    pub biomes: Vec<BiomeDef>,
    #[serde(default = "d_one")]
    pub scale_x: f32,
    #[serde(default = "d_one")]
    pub scale_z: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Climate2D {
    #[serde(default = "default_climate_freq")]
    pub frequency: f32,
}

fn default_climate_freq() -> f32 {
    0.01
}

impl Default for Climate2D {
    fn default() -> Self {
        Self {
            frequency: default_climate_freq(),
        }
    }
}

fn d_one() -> f32 {
    1.0
}

#[derive(Clone, Debug, Deserialize)]
pub struct BiomeDef {
    pub name: String,
    #[serde(default)]
    pub temp_min: Option<f32>,
    #[serde(default)]
    pub temp_max: Option<f32>,
    #[serde(default)]
    pub moisture_min: Option<f32>,
    #[serde(default)]
    pub moisture_max: Option<f32>,
    #[serde(default)]
    pub species_weights: HashMap<String, f32>,
    #[serde(default)]
    pub tree_density: Option<f32>,
    #[serde(default)]
    pub leaf_tint: Option<[f32; 3]>,
}

// Flattened params used by samplers (snapshot of config)
#[derive(Clone, Debug)]
pub struct ForestParams {
    pub tree_probability: f32,
    pub biomes: Option<BiomesParams>,
}

#[derive(Clone, Debug)]
pub struct BiomesParams {
    pub temp_freq: f32,
    pub moisture_freq: f32,
    pub defs: Vec<BiomeDefParam>,
    pub scale_x: f32,
    pub scale_z: f32,
}

#[derive(Clone, Debug)]
pub struct BiomeDefParam {
    pub name: String,
    pub temp_min: f32,
    pub temp_max: f32,
    pub moisture_min: f32,
    pub moisture_max: f32,
    pub species_weights: HashMap<String, f32>,
    pub tree_density: Option<f32>,
    pub leaf_tint: Option<[f32; 3]>,
}

impl ForestParams {
    pub fn default() -> Self {
        Self::from_config(&ForestConfig::default())
    }

    pub fn from_config(cfg: &ForestConfig) -> Self {
        Self {
            tree_probability: cfg.trees.probability,
            biomes: if cfg.biomes.enable {
                Some(BiomesParams::from(&cfg.biomes))
            } else {
                None
            },
        }
    }
}

impl BiomesParams {
    pub fn from(cfg: &Biomes) -> Self {
        let defs = cfg
            .biomes
            .iter()
            .map(|b| BiomeDefParam {
                name: b.name.clone(),
                temp_min: b.temp_min.unwrap_or(0.0),
                temp_max: b.temp_max.unwrap_or(1.0),
                moisture_min: b.moisture_min.unwrap_or(0.0),
                moisture_max: b.moisture_max.unwrap_or(1.0),
                species_weights: b.species_weights.clone(),
                tree_density: b.tree_density,
                leaf_tint: b.leaf_tint,
            })
            .collect();
        Self {
            temp_freq: cfg.temp.frequency,
            moisture_freq: cfg.moisture.frequency,
            defs,
            scale_x: cfg.scale_x,
            scale_z: cfg.scale_z,
        }
    }
}

pub fn load_params_from_path(path: &Path) -> Result<ForestParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: ForestConfig = toml::from_str(&s)?;
    Ok(ForestParams::from_config(&cfg))
}
