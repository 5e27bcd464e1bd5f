use blockcraft_core::block::BlockType;
use blockcraft_core::types::GridPosition;
use std::collections::HashMap;

/// Change notification emitted by [`VoxelWorld`]. A renderer adapter drains
/// these to keep its meshes in step with the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    Added {
        position: GridPosition,
        block: BlockType,
    },
    Removed {
        position: GridPosition,
        block: BlockType,
    },
}

impl WorldEvent {
    pub fn position(&self) -> GridPosition {
        match *self {
            WorldEvent::Added { position, .. } | WorldEvent::Removed { position, .. } => position,
        }
    }
}

/// One live voxel as a plain record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelRecord {
    pub position: GridPosition,
    pub block: BlockType,
}

/// Sparse voxel storage keyed by grid position.
///
/// Entries are never overwritten: `place` on an occupied cell and `remove` on
/// an empty one are silent no-ops.
///
/// Every change queues a [`WorldEvent`] that stays queued until
/// `drain_events` is called. A world with no listener should be built with
/// `untracked` so the queue does not grow with every voxel.
#[derive(Debug, Default)]
pub struct VoxelWorld {
    entries: HashMap<GridPosition, BlockType>,
    /// Notifications not yet drained by a listener.
    events: Vec<WorldEvent>,
    untracked: bool,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// A world that queues no change notifications.
    pub fn untracked() -> Self {
        Self {
            untracked: true,
            ..Self::default()
        }
    }

    fn notify(&mut self, event: WorldEvent) {
        if !self.untracked {
            self.events.push(event);
        }
    }

    /// Place a block. Returns false (and changes nothing) if the cell is
    /// already occupied.
    pub fn place(&mut self, position: GridPosition, block: BlockType) -> bool {
        if self.entries.contains_key(&position) {
            log::trace!("place at {position} ignored: occupied");
            return false;
        }
        self.entries.insert(position, block);
        self.notify(WorldEvent::Added { position, block });
        true
    }

    /// Remove the block at a cell. Returns the removed block, or None if the
    /// cell was empty.
    pub fn remove(&mut self, position: GridPosition) -> Option<BlockType> {
        let block = self.entries.remove(&position)?;
        self.notify(WorldEvent::Removed { position, block });
        Some(block)
    }

    /// Remove every entry. Returns how many were removed.
    pub fn reset(&mut self) -> usize {
        let removed = self.entries.len();
        if self.untracked {
            self.entries.clear();
        } else {
            for (position, block) in self.entries.drain() {
                self.events.push(WorldEvent::Removed { position, block });
            }
        }
        log::debug!("World reset: {removed} voxels removed");
        removed
    }

    /// Block at a cell, if any.
    pub fn get(&self, position: GridPosition) -> Option<BlockType> {
        self.entries.get(&position).copied()
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        self.entries.contains_key(&position)
    }

    /// Number of live voxels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over all live voxels, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = VoxelRecord> + '_ {
        self.entries
            .iter()
            .map(|(&position, &block)| VoxelRecord { position, block })
    }

    /// Snapshot of every live voxel. Order is unspecified.
    pub fn serialize(&self) -> Vec<VoxelRecord> {
        self.iter().collect()
    }

    /// Place every record with `place` semantics. Returns how many cells were
    /// newly filled.
    pub fn deserialize(&mut self, records: &[VoxelRecord]) -> usize {
        records
            .iter()
            .filter(|r| self.place(r.position, r.block))
            .count()
    }

    /// Take the pending change notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending notifications without consuming them.
    pub fn pending_events(&self) -> &[WorldEvent] {
        &self.events
    }
}
