use blockcraft_core::block::{BlockDef, Palette};
use blockcraft_core::types::{cell_center, GridPosition};
use blockcraft_world::WorldEvent;
use glam::Vec3;
use std::collections::HashMap;

/// Opaque handle to a block mesh owned by the render backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Opaque handle to a wireframe cursor indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorHandle(pub u64);

/// Scene operations the session needs from a renderer.
pub trait RenderBackend {
    /// Create a unit box with the block's face textures, centered at `center`.
    fn create_block_mesh(&mut self, def: &BlockDef, center: Vec3) -> MeshHandle;
    fn remove_mesh(&mut self, handle: MeshHandle);

    fn create_indicator(&mut self, center: Vec3) -> IndicatorHandle;
    fn move_indicator(&mut self, handle: IndicatorHandle, center: Vec3);
    fn destroy_indicator(&mut self, handle: IndicatorHandle);

    fn play_clip(&mut self, name: &str);
    fn stop_clip(&mut self, name: &str);

    fn set_avatar_transform(&mut self, position: Vec3, yaw: f32);
    fn set_camera(&mut self, eye: Vec3, target: Vec3);
}

/// Keeps backend meshes and indicators in step with world notifications and
/// cursor state.
#[derive(Debug, Default)]
pub struct RenderBridge {
    meshes: HashMap<GridPosition, MeshHandle>,
    indicators: Vec<IndicatorHandle>,
}

impl RenderBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or remove meshes for each world notification, in order.
    pub fn apply_events<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        palette: &Palette,
        events: &[WorldEvent],
    ) {
        for event in events {
            match *event {
                WorldEvent::Added { position, block } => {
                    let Some(def) = palette.get(block) else {
                        log::warn!("No palette entry for {block}; voxel at {position} not drawn");
                        continue;
                    };
                    let handle = backend.create_block_mesh(def, cell_center(position));
                    if let Some(stale) = self.meshes.insert(position, handle) {
                        backend.remove_mesh(stale);
                    }
                }
                WorldEvent::Removed { position, .. } => {
                    if let Some(handle) = self.meshes.remove(&position) {
                        backend.remove_mesh(handle);
                    }
                }
            }
        }
    }

    /// Show one indicator per cell, reusing existing ones where possible.
    pub fn sync_indicators<B: RenderBackend>(&mut self, backend: &mut B, cells: &[GridPosition]) {
        while self.indicators.len() > cells.len() {
            if let Some(handle) = self.indicators.pop() {
                backend.destroy_indicator(handle);
            }
        }
        for (i, &cell) in cells.iter().enumerate() {
            let center = cell_center(cell);
            match self.indicators.get(i) {
                Some(&handle) => backend.move_indicator(handle, center),
                None => {
                    let handle = backend.create_indicator(center);
                    self.indicators.push(handle);
                }
            }
        }
    }

    /// Mesh currently drawn for a cell.
    pub fn mesh_at(&self, position: GridPosition) -> Option<MeshHandle> {
        self.meshes.get(&position).copied()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessBackend, RenderCall};
    use blockcraft_core::block::{BlockTextures, BlockType, Rgb, ALL_BLOCK_TYPES};
    use glam::IVec3;

    fn palette() -> Palette {
        let blocks = ALL_BLOCK_TYPES
            .iter()
            .map(|&block| BlockDef {
                block,
                color: Rgb(10, 20, 30),
                textures: BlockTextures {
                    side: format!("{block}_side.png"),
                    top: format!("{block}_top.png"),
                    bottom: format!("{block}_bottom.png"),
                },
            })
            .collect();
        Palette::new(blocks).expect("complete palette")
    }

    #[test]
    fn test_added_then_removed() {
        let mut backend = HeadlessBackend::new();
        let mut bridge = RenderBridge::new();
        let pos = IVec3::new(1, 2, 3);
        bridge.apply_events(
            &mut backend,
            &palette(),
            &[WorldEvent::Added {
                position: pos,
                block: BlockType::Wood,
            }],
        );
        let handle = bridge.mesh_at(pos).expect("mesh created");
        assert_eq!(backend.live_meshes(), 1);
        assert!(matches!(
            backend.calls()[0],
            RenderCall::CreateMesh { block: BlockType::Wood, .. }
        ));

        bridge.apply_events(
            &mut backend,
            &palette(),
            &[WorldEvent::Removed {
                position: pos,
                block: BlockType::Wood,
            }],
        );
        assert_eq!(bridge.mesh_count(), 0);
        assert_eq!(backend.live_meshes(), 0);
        assert_eq!(backend.calls()[1], RenderCall::RemoveMesh(handle));
    }

    #[test]
    fn test_mesh_centered_on_cell() {
        let mut backend = HeadlessBackend::new();
        let mut bridge = RenderBridge::new();
        bridge.apply_events(
            &mut backend,
            &palette(),
            &[WorldEvent::Added {
                position: IVec3::new(2, 0, -1),
                block: BlockType::Grass,
            }],
        );
        match &backend.calls()[0] {
            RenderCall::CreateMesh { center, .. } => {
                assert_eq!(*center, Vec3::new(2.0, 0.5, -1.0));
            }
            other => panic!("expected CreateMesh, got {:?}", other),
        }
    }

    #[test]
    fn test_indicators_grow_and_shrink() {
        let mut backend = HeadlessBackend::new();
        let mut bridge = RenderBridge::new();
        let column = |n: i32| (0..n).map(|y| IVec3::new(0, y, 0)).collect::<Vec<_>>();

        bridge.sync_indicators(&mut backend, &column(3));
        assert_eq!(bridge.indicator_count(), 3);
        assert_eq!(backend.live_indicators(), 3);

        bridge.sync_indicators(&mut backend, &column(1));
        assert_eq!(bridge.indicator_count(), 1);
        assert_eq!(backend.live_indicators(), 1);
    }
}
