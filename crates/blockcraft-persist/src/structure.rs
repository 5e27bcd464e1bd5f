use blockcraft_core::types::GridPosition;
use blockcraft_world::{VoxelRecord, VoxelWorld};

use crate::error::PersistError;
use crate::format::SaveRecord;

/// Place a structure's records into the world, shifted by `offset`.
///
/// Uses `place` semantics, so voxels already in the world win. Returns how
/// many cells were newly filled.
pub fn stamp_structure(world: &mut VoxelWorld, records: &[VoxelRecord], offset: GridPosition) -> usize {
    let placed = records
        .iter()
        .filter(|r| world.place(r.position + offset, r.block))
        .count();
    log::debug!(
        "Stamped structure at {offset}: {placed}/{} voxels placed",
        records.len()
    );
    placed
}

/// Export the voxels inside `[min, max]` (inclusive) as save records with
/// positions relative to `min`, ready to be stamped elsewhere.
pub fn export_region(
    world: &VoxelWorld,
    min: GridPosition,
    max: GridPosition,
) -> Result<Vec<SaveRecord>, PersistError> {
    if min.cmpgt(max).any() {
        return Err(PersistError::InvertedRegion {
            min: min.to_array(),
            max: max.to_array(),
        });
    }

    let mut records: Vec<SaveRecord> = world
        .iter()
        .filter(|r| r.position.cmpge(min).all() && r.position.cmple(max).all())
        .map(|r| {
            SaveRecord::from(VoxelRecord {
                position: r.position - min,
                block: r.block,
            })
        })
        .collect();
    records.sort_by_key(|r| r.position);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load;
    use blockcraft_core::block::BlockType;
    use glam::IVec3;

    const TREE_A1: &str = include_str!("../../../data/structures/tree_a1.json");

    #[test]
    fn test_region_filters_correctly() {
        let mut world = VoxelWorld::new();
        world.place(IVec3::new(0, 0, 0), BlockType::Log);
        world.place(IVec3::new(1, 0, 0), BlockType::Leaves);
        world.place(IVec3::new(5, 5, 5), BlockType::Wood);

        let records =
            export_region(&world, IVec3::new(0, 0, 0), IVec3::new(2, 2, 2)).expect("valid region");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.block_type != BlockType::Wood));
    }

    #[test]
    fn test_region_is_relative_to_min() {
        let mut world = VoxelWorld::new();
        world.place(IVec3::new(10, 4, -3), BlockType::Bricks);

        let records = export_region(&world, IVec3::new(8, 4, -5), IVec3::new(12, 8, 0))
            .expect("valid region");
        assert_eq!(records.len(), 1);
        assert_eq!(IVec3::from(records[0].position), IVec3::new(2, 0, 2));
    }

    #[test]
    fn test_inverted_region_rejected() {
        let world = VoxelWorld::new();
        let result = export_region(&world, IVec3::new(0, 3, 0), IVec3::new(4, 2, 4));
        assert!(matches!(result, Err(PersistError::InvertedRegion { .. })));
    }

    #[test]
    fn test_export_then_stamp_copies_structure() {
        let mut world = VoxelWorld::new();
        world.place(IVec3::new(0, 0, 0), BlockType::Log);
        world.place(IVec3::new(0, 1, 0), BlockType::Leaves);

        let records: Vec<VoxelRecord> =
            export_region(&world, IVec3::ZERO, IVec3::new(0, 1, 0))
                .expect("valid region")
                .into_iter()
                .map(VoxelRecord::from)
                .collect();
        assert_eq!(stamp_structure(&mut world, &records, IVec3::new(3, 0, 3)), 2);
        assert_eq!(world.get(IVec3::new(3, 1, 3)), Some(BlockType::Leaves));
        assert_eq!(world.len(), 4);
    }

    #[test]
    fn test_stamp_does_not_overwrite() {
        let mut world = VoxelWorld::new();
        world.place(IVec3::new(5, 1, 5), BlockType::Rock);
        let records = [VoxelRecord {
            position: IVec3::new(0, 1, 0),
            block: BlockType::Log,
        }];
        assert_eq!(stamp_structure(&mut world, &records, IVec3::new(5, 0, 5)), 0);
        assert_eq!(world.get(IVec3::new(5, 1, 5)), Some(BlockType::Rock));
    }

    #[test]
    fn test_tree_prefab_stamps() {
        let records = load::from_json(TREE_A1).expect("prefab should parse");
        assert!(records.iter().any(|r| r.block == BlockType::Log));
        assert!(records.iter().any(|r| r.block == BlockType::Leaves));

        let mut world = VoxelWorld::new();
        let placed = stamp_structure(&mut world, &records, IVec3::new(12, 2, -2));
        assert_eq!(placed, records.len());
        assert_eq!(world.get(IVec3::new(12, 2, -2)), Some(BlockType::Log));
    }
}
