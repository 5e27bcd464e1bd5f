use blockcraft_core::block::{BlockDef, BlockType};
use glam::Vec3;
use std::collections::HashSet;

use crate::render::{IndicatorHandle, MeshHandle, RenderBackend};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    CreateMesh {
        handle: MeshHandle,
        block: BlockType,
        center: Vec3,
    },
    RemoveMesh(MeshHandle),
    CreateIndicator(IndicatorHandle, Vec3),
    MoveIndicator(IndicatorHandle, Vec3),
    DestroyIndicator(IndicatorHandle),
    PlayClip(String),
    StopClip(String),
}

/// Backend without a graphics context. Records scene calls and tracks what
/// would be alive, for tests and the bench runner.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u64,
    calls: Vec<RenderCall>,
    meshes: HashSet<MeshHandle>,
    indicators: HashSet<IndicatorHandle>,
    avatar: (Vec3, f32),
    camera: (Vec3, Vec3),
    /// Skip recording calls; only track live handles.
    quiet: bool,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that does not keep a call log.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    fn record(&mut self, call: RenderCall) {
        if !self.quiet {
            self.calls.push(call);
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty.
    pub fn take_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn live_meshes(&self) -> usize {
        self.meshes.len()
    }

    pub fn live_indicators(&self) -> usize {
        self.indicators.len()
    }

    pub fn avatar_transform(&self) -> (Vec3, f32) {
        self.avatar
    }

    pub fn camera(&self) -> (Vec3, Vec3) {
        self.camera
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_block_mesh(&mut self, def: &BlockDef, center: Vec3) -> MeshHandle {
        let handle = MeshHandle(self.next_id());
        self.meshes.insert(handle);
        self.record(RenderCall::CreateMesh {
            handle,
            block: def.block,
            center,
        });
        handle
    }

    fn remove_mesh(&mut self, handle: MeshHandle) {
        self.meshes.remove(&handle);
        self.record(RenderCall::RemoveMesh(handle));
    }

    fn create_indicator(&mut self, center: Vec3) -> IndicatorHandle {
        let handle = IndicatorHandle(self.next_id());
        self.indicators.insert(handle);
        self.record(RenderCall::CreateIndicator(handle, center));
        handle
    }

    fn move_indicator(&mut self, handle: IndicatorHandle, center: Vec3) {
        self.record(RenderCall::MoveIndicator(handle, center));
    }

    fn destroy_indicator(&mut self, handle: IndicatorHandle) {
        self.indicators.remove(&handle);
        self.record(RenderCall::DestroyIndicator(handle));
    }

    fn play_clip(&mut self, name: &str) {
        self.record(RenderCall::PlayClip(name.to_string()));
    }

    fn stop_clip(&mut self, name: &str) {
        self.record(RenderCall::StopClip(name.to_string()));
    }

    fn set_avatar_transform(&mut self, position: Vec3, yaw: f32) {
        self.avatar = (position, yaw);
    }

    fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        self.camera = (eye, target);
    }
}
