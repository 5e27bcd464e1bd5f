use blockcraft_core::block::BlockType;
use blockcraft_world::VoxelRecord;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Integer grid position as written in save files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionRecord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// One voxel in a save file: `{"position": {"x", "y", "z"}, "blockType": code}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SaveRecord {
    pub position: PositionRecord,
    pub block_type: BlockType,
}

impl From<IVec3> for PositionRecord {
    fn from(v: IVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<PositionRecord> for IVec3 {
    fn from(p: PositionRecord) -> Self {
        IVec3::new(p.x, p.y, p.z)
    }
}

impl From<VoxelRecord> for SaveRecord {
    fn from(r: VoxelRecord) -> Self {
        Self {
            position: r.position.into(),
            block_type: r.block,
        }
    }
}

impl From<SaveRecord> for VoxelRecord {
    fn from(r: SaveRecord) -> Self {
        Self {
            position: r.position.into(),
            block: r.block_type,
        }
    }
}
