pub type BlockId = u16;
pub type BlockState = u16;

/// Runtime block value: registry id plus packed state bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub id: BlockId,
    pub state: BlockState,
}

impl Block {
    pub const AIR: Block = Block { id: 0, state: 0 };

    #[inline]
    pub const fn new(id: BlockId) -> Self {
        Self { id, state: 0 }
    }

    #[inline]
    pub const fn with_state(self, state: BlockState) -> Self {
        Self { state, ..self }
    }
}

/// Orientation of a log block, packed into the state word.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogAxis {
    X,
    Y,
    Z,
}

impl LogAxis {
    #[inline]
    pub const fn state(self) -> BlockState {
        match self {
            LogAxis::X => 0,
            LogAxis::Y => 1,
            LogAxis::Z => 2,
        }
    }
}

/// Coarse material class. Growth logic never inspects individual block
/// types, only the class of whatever occupies a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Material {
    Air,
    Leaves,
    Grass,
    Dirt,
    Wood,
    Vine,
    Sapling,
    Stone,
    Water,
}

impl Material {
    pub fn parse(s: &str) -> Option<Material> {
        Some(match s {
            "air" => Material::Air,
            "leaves" => Material::Leaves,
            "grass" => Material::Grass,
            "dirt" => Material::Dirt,
            "wood" => Material::Wood,
            "vine" => Material::Vine,
            "sapling" => Material::Sapling,
            "stone" => Material::Stone,
            "water" => Material::Water,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Material::Air => "air",
            Material::Leaves => "leaves",
            Material::Grass => "grass",
            Material::Dirt => "dirt",
            Material::Wood => "wood",
            Material::Vine => "vine",
            Material::Sapling => "sapling",
            Material::Stone => "stone",
            Material::Water => "water",
        }
    }

    /// Whether a growing tree may claim a cell of this class.
    #[inline]
    pub fn can_grow_into(self) -> bool {
        matches!(
            self,
            Material::Air
                | Material::Leaves
                | Material::Grass
                | Material::Dirt
                | Material::Wood
                | Material::Vine
                | Material::Sapling
        )
    }

    /// Whether foliage may overwrite a cell of this class.
    #[inline]
    pub fn replaceable_by_leaves(self) -> bool {
        matches!(
            self,
            Material::Air | Material::Leaves | Material::Vine | Material::Sapling
        )
    }

    /// Whether a sapling planted directly above survives on this class.
    #[inline]
    pub fn sustains_sapling(self) -> bool {
        matches!(self, Material::Grass | Material::Dirt)
    }
}
