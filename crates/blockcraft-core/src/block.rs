use serde::{Deserialize, Serialize};

use crate::error::BlockcraftError;

/// Closed set of block types. Codes are the snake_case names used in
/// palette data and save files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockType {
    Grass = 0,
    Log = 1,
    Leaves = 2,
    Bricks = 3,
    StoneBricks = 4,
    DarkBricks = 5,
    MossyStoneBricks = 6,
    DetailedStoneBricks = 7,
    Wood = 8,
    Dirt = 9,
    Rock = 10,
}

/// Every block type, in declaration order.
pub const ALL_BLOCK_TYPES: [BlockType; 11] = [
    BlockType::Grass,
    BlockType::Log,
    BlockType::Leaves,
    BlockType::Bricks,
    BlockType::StoneBricks,
    BlockType::DarkBricks,
    BlockType::MossyStoneBricks,
    BlockType::DetailedStoneBricks,
    BlockType::Wood,
    BlockType::Dirt,
    BlockType::Rock,
];

impl BlockType {
    /// Stable string code (save files, palette data).
    pub fn code(self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Log => "log",
            BlockType::Leaves => "leaves",
            BlockType::Bricks => "bricks",
            BlockType::StoneBricks => "stone_bricks",
            BlockType::DarkBricks => "dark_bricks",
            BlockType::MossyStoneBricks => "mossy_stone_bricks",
            BlockType::DetailedStoneBricks => "detailed_stone_bricks",
            BlockType::Wood => "wood",
            BlockType::Dirt => "dirt",
            BlockType::Rock => "rock",
        }
    }

    /// Resolve a string code to a block type.
    pub fn from_code(code: &str) -> Result<Self, BlockcraftError> {
        ALL_BLOCK_TYPES
            .iter()
            .copied()
            .find(|b| b.code() == code)
            .ok_or_else(|| BlockcraftError::UnknownBlockCode(code.to_string()))
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 8-bit sRGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Color channels normalized to 0.0–1.0.
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Texture references for the three face groups of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTextures {
    pub side: String,
    pub top: String,
    pub bottom: String,
}

/// One resolved palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDef {
    pub block: BlockType,
    pub color: Rgb,
    pub textures: BlockTextures,
}

/// Ordered block palette. The order is the cycling order of the editor's
/// block selection.
#[derive(Debug, Clone)]
pub struct Palette {
    blocks: Vec<BlockDef>,
}

impl Palette {
    /// Build a palette. Every `BlockType` must have an entry so that any
    /// placed voxel can be rendered.
    pub fn new(blocks: Vec<BlockDef>) -> Result<Self, BlockcraftError> {
        for block in ALL_BLOCK_TYPES {
            if !blocks.iter().any(|d| d.block == block) {
                return Err(BlockcraftError::MissingFromPalette(block.code()));
            }
        }
        Ok(Self { blocks })
    }

    /// Look up the definition of a block type.
    pub fn get(&self, block: BlockType) -> Option<&BlockDef> {
        self.blocks.iter().find(|d| d.block == block)
    }

    /// Entry at a selection index.
    pub fn at(&self, index: usize) -> Option<&BlockDef> {
        self.blocks.get(index)
    }

    /// Entry at a selection index, wrapping past the end. `new` guarantees an
    /// entry per block type, so a palette is never empty.
    pub fn cycled(&self, index: usize) -> &BlockDef {
        &self.blocks[index % self.blocks.len()]
    }

    /// Selection index of a block type.
    pub fn index_of(&self, block: BlockType) -> Option<usize> {
        self.blocks.iter().position(|d| d.block == block)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockDef> {
        self.blocks.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the palette is empty. Never true for a palette built by `new`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
