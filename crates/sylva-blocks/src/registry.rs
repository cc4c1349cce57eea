use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::BlocksConfig;
use super::types::{Block, BlockId, Material};

#[derive(Clone, Debug)]
pub struct BlockType {
    pub name: String,
    pub id: BlockId,
    pub material: Material,
    pub solid: bool,
}

#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    pub unknown_block_id: Option<BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            by_name: HashMap::new(),
            unknown_block_id: None,
        }
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn block_by_name(&self, name: &str) -> Option<Block> {
        self.id_by_name(name).map(Block::new)
    }

    /// Material class of a runtime block. Ids outside the registry read as
    /// stone so that nothing grows into unmapped cells.
    pub fn material_of(&self, block: Block) -> Material {
        self.get(block.id)
            .map(|ty| ty.material)
            .unwrap_or(Material::Stone)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry::new();
        let unknown_name = cfg.unknown_block.clone();
        for def in cfg.blocks.into_iter() {
            let id = def.id.unwrap_or(reg.blocks.len() as u16);
            if id as usize != reg.blocks.len() {
                return Err(format!(
                    "block '{}' declares id {} but position {} is next",
                    def.name,
                    id,
                    reg.blocks.len()
                )
                .into());
            }
            let material = Material::parse(&def.material).ok_or_else(|| {
                format!(
                    "block '{}' has unknown material class '{}'",
                    def.name, def.material
                )
            })?;
            let solid = def.solid.unwrap_or(!matches!(
                material,
                Material::Air | Material::Vine | Material::Sapling | Material::Water
            ));
            if reg.by_name.contains_key(&def.name) {
                return Err(format!("duplicate block name '{}'", def.name).into());
            }
            reg.by_name.insert(def.name.clone(), id);
            reg.blocks.push(BlockType {
                name: def.name,
                id,
                material,
                solid,
            });
        }
        if let Some(name) = unknown_name {
            reg.unknown_block_id = reg.id_by_name(&name);
        }
        Ok(reg)
    }
}
