use blockcraft_core::block::{BlockType, Palette};
use blockcraft_core::config::WorldConfig;
use blockcraft_core::constants::WALK_CLIP;
use blockcraft_core::direction::StepDirection;
use blockcraft_core::types::GridPosition;
use blockcraft_world::{populate_terrain, HeightField, VoxelRecord, VoxelWorld};
use glam::IVec2;

use crate::camera::FollowCamera;
use crate::clock::FrameClock;
use crate::cursor::Cursor;
use crate::error::SessionError;
use crate::input::{InputState, Key};
use crate::locomotion::{AvatarLocomotion, TickOutcome};
use crate::render::{RenderBackend, RenderBridge};

/// Owns everything a running world needs: voxels, terrain, cursor, avatar,
/// camera, input and the render adapter.
///
/// Key presses that edit the world apply immediately; continuous movement is
/// integrated once per `frame`.
pub struct Session<B: RenderBackend> {
    config: WorldConfig,
    palette: Palette,
    world: VoxelWorld,
    field: HeightField,
    cursor: Cursor,
    avatar: AvatarLocomotion,
    camera: FollowCamera,
    input: InputState,
    clock: FrameClock,
    bridge: RenderBridge,
    backend: B,
    walking: bool,
}

impl<B: RenderBackend> Session<B> {
    /// Generate terrain from the config and start a session on it.
    pub fn new(config: WorldConfig, palette: Palette, backend: B) -> Result<Self, SessionError> {
        let field = HeightField::generate(&config.terrain)?;
        Self::with_height_field(config, palette, field, backend)
    }

    /// Start a session on the built-in palette and configuration.
    pub fn from_builtin(backend: B) -> Result<Self, SessionError> {
        let config = blockcraft_data::defaults::builtin_config()?;
        let palette = blockcraft_data::defaults::builtin_palette()?;
        Self::new(config, palette, backend)
    }

    /// Start a session on an existing height field.
    pub fn with_height_field(
        config: WorldConfig,
        palette: Palette,
        field: HeightField,
        backend: B,
    ) -> Result<Self, SessionError> {
        let mut world = VoxelWorld::new();
        if config.session.populate_terrain {
            populate_terrain(&mut world, &field);
        }

        let spawn = IVec2::from_array(config.session.spawn);
        let avatar = AvatarLocomotion::spawn(config.locomotion.clone(), &field, spawn)?;
        let mut camera = FollowCamera::new(&config.camera);
        camera.follow(avatar.position());

        let mut session = Self {
            cursor: Cursor::new(&config.cursor, palette.len()),
            clock: FrameClock::new(config.session.max_frame_delta),
            config,
            palette,
            world,
            field,
            avatar,
            camera,
            input: InputState::new(),
            bridge: RenderBridge::new(),
            backend,
            walking: false,
        };
        session.sync_world();
        session.sync_cursor();
        session.sync_view();
        log::info!(
            "Session started: {} voxels, {}x{} terrain",
            session.world.len(),
            session.field.side(),
            session.field.side()
        );
        Ok(session)
    }

    /// Handle a key press. Editing keys act on every call, so key repeat
    /// keeps stepping the cursor.
    pub fn key_down(&mut self, key: Key) -> Result<(), SessionError> {
        self.input.press(key);
        match key {
            Key::ArrowUp => self.step_cursor(StepDirection::NegZ),
            Key::ArrowDown => self.step_cursor(StepDirection::PosZ),
            Key::ArrowLeft => self.step_cursor(StepDirection::NegX),
            Key::ArrowRight => self.step_cursor(StepDirection::PosX),
            Key::PageUp => {
                if self.cursor.raise_height() {
                    self.sync_cursor();
                }
            }
            Key::PageDown => {
                if self.cursor.lower_height() {
                    self.sync_cursor();
                }
            }
            Key::Q => {
                self.place_at_cursor();
            }
            Key::E => {
                self.remove_at_cursor()?;
            }
            Key::Period => {
                self.cycle_block_type(1);
            }
            Key::Comma => {
                self.cycle_block_type(-1);
            }
            Key::Space => {
                self.avatar.jump();
            }
            Key::W | Key::A | Key::S | Key::D => {}
        }
        Ok(())
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Advance one frame by a raw elapsed time in seconds.
    pub fn frame(&mut self, raw_dt: f32) -> Result<TickOutcome, SessionError> {
        let dt = self.clock.clamp(raw_dt);
        let keys = self.input.movement_keys();
        let outcome = self
            .avatar
            .tick(&self.field, keys, self.camera.view_yaw(), dt)?;

        if outcome.walking != self.walking {
            if outcome.walking {
                self.backend.play_clip(WALK_CLIP);
            } else {
                self.backend.stop_clip(WALK_CLIP);
            }
            self.walking = outcome.walking;
        }

        self.camera.follow(self.avatar.position());
        self.sync_world();
        self.sync_view();
        Ok(outcome)
    }

    /// Advance one frame from an animation-frame timestamp in milliseconds.
    pub fn frame_at(&mut self, timestamp_ms: f64) -> Result<TickOutcome, SessionError> {
        let dt = self.clock.advance(timestamp_ms);
        self.frame(dt)
    }

    fn step_cursor(&mut self, direction: StepDirection) {
        if self.cursor.step(direction) {
            self.sync_cursor();
        }
    }

    /// Select the next or previous palette entry.
    pub fn cycle_block_type(&mut self, delta: i32) -> BlockType {
        let index = self.cursor.cycle_block_type(delta);
        let block = self.selected_block();
        log::debug!("Selected block {block} (#{index})");
        block
    }

    /// Block type under the cursor's selection index.
    pub fn selected_block(&self) -> BlockType {
        self.palette.cycled(self.cursor.block_index()).block
    }

    /// Place the selected block at the cursor. Occupied cells are left alone.
    pub fn place_at_cursor(&mut self) -> bool {
        let position = self.cursor.position();
        let block = self.selected_block();
        let placed = self.world.place(position, block);
        if placed {
            log::debug!("Placed {block} at {position}");
        }
        self.sync_world();
        placed
    }

    /// Remove the voxel at the cursor. Removing the top voxel of a terrain
    /// column also lowers that column.
    pub fn remove_at_cursor(&mut self) -> Result<Option<BlockType>, SessionError> {
        let position = self.cursor.position();
        let removed = self.world.remove(position);
        if let Some(block) = removed {
            log::debug!("Removed {block} at {position}");
            self.lower_if_surface(position)?;
        }
        self.sync_world();
        Ok(removed)
    }

    fn lower_if_surface(&mut self, position: GridPosition) -> Result<(), SessionError> {
        if !self.field.contains(position.x, position.z) {
            return Ok(());
        }
        let height = self.field.height_at(position.x, position.z)?;
        if position.y == height - 1 {
            let lowered = self.field.lower(position.x, position.z, 1)?;
            log::debug!(
                "Column ({}, {}) lowered to {lowered}",
                position.x,
                position.z
            );
        }
        Ok(())
    }

    /// Current world as a JSON save file.
    pub fn export_world(&self) -> Result<String, SessionError> {
        Ok(blockcraft_persist::to_json(&self.world)?)
    }

    /// Merge a JSON save file into the world. Nothing changes if any record
    /// is malformed. Columns whose surface is now covered by imported voxels
    /// rise to match. Returns how many cells were newly filled.
    pub fn import_world(&mut self, json: &str) -> Result<usize, SessionError> {
        let placed = blockcraft_persist::load(&mut self.world, json)?;
        self.field.raise_to_voxels(&self.world);
        self.sync_world();
        Ok(placed)
    }

    /// Place a structure's records shifted by `offset`.
    pub fn stamp_structure(&mut self, records: &[VoxelRecord], offset: GridPosition) -> usize {
        let placed = blockcraft_persist::stamp_structure(&mut self.world, records, offset);
        self.sync_world();
        placed
    }

    /// Remove every voxel. The terrain goes with them, so the height field
    /// is flattened to zero.
    pub fn reset_world(&mut self) -> Result<usize, SessionError> {
        let removed = self.world.reset();
        self.field = HeightField::flat(self.field.half_extent(), 0)?;
        self.sync_world();
        Ok(removed)
    }

    fn sync_world(&mut self) {
        let events = self.world.drain_events();
        if !events.is_empty() {
            self.bridge
                .apply_events(&mut self.backend, &self.palette, &events);
        }
    }

    fn sync_cursor(&mut self) {
        let cells = self.cursor.indicator_positions();
        self.bridge.sync_indicators(&mut self.backend, &cells);
    }

    fn sync_view(&mut self) {
        self.backend
            .set_avatar_transform(self.avatar.position(), self.avatar.facing());
        self.backend
            .set_camera(self.camera.eye_position(), self.camera.target);
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn height_field(&self) -> &HeightField {
        &self.field
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn avatar(&self) -> &AvatarLocomotion {
        &self.avatar
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FollowCamera {
        &mut self.camera
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn render_bridge(&self) -> &RenderBridge {
        &self.bridge
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessBackend, RenderCall};
    use blockcraft_persist::PersistError;
    use glam::IVec3;

    fn flat_session(height: i32, populate: bool) -> Session<HeadlessBackend> {
        let mut config = blockcraft_data::defaults::builtin_config().expect("builtin config");
        config.session.populate_terrain = populate;
        let palette = blockcraft_data::defaults::builtin_palette().expect("builtin palette");
        let field = HeightField::flat(8, height).expect("valid extent");
        Session::with_height_field(config, palette, field, HeadlessBackend::new())
            .expect("session starts")
    }

    #[test]
    fn test_builtin_session_starts() {
        let session = Session::from_builtin(HeadlessBackend::quiet()).expect("session starts");
        assert!(session.world().len() > 0);
        assert_eq!(session.backend().live_meshes(), session.world().len());
        assert_eq!(session.backend().live_indicators(), 1);
        assert!(session.avatar().is_grounded());
    }

    #[test]
    fn test_place_and_remove_drive_meshes() {
        let mut session = flat_session(0, false);
        session.key_down(Key::ArrowRight).expect("key");
        session.key_down(Key::Q).expect("key");
        assert_eq!(session.world().get(IVec3::new(1, 0, 0)), Some(BlockType::Grass));
        assert_eq!(session.backend().live_meshes(), 1);

        // Second place on the same cell is a no-op.
        session.key_down(Key::Period).expect("key");
        session.key_down(Key::Q).expect("key");
        assert_eq!(session.world().get(IVec3::new(1, 0, 0)), Some(BlockType::Grass));
        assert_eq!(session.backend().live_meshes(), 1);

        session.key_down(Key::E).expect("key");
        assert!(session.world().is_empty());
        assert_eq!(session.backend().live_meshes(), 0);

        // Removing again is a no-op too.
        assert_eq!(session.remove_at_cursor().expect("remove"), None);
    }

    #[test]
    fn test_cursor_keys_move_indicators() {
        let mut session = flat_session(0, false);
        session.backend_mut().take_calls();
        session.key_down(Key::PageUp).expect("key");
        session.key_down(Key::PageUp).expect("key");
        assert_eq!(session.cursor().position(), IVec3::new(0, 2, 0));
        assert_eq!(session.backend().live_indicators(), 3);

        session.key_down(Key::PageDown).expect("key");
        assert_eq!(session.backend().live_indicators(), 2);
        assert!(session
            .backend()
            .calls()
            .iter()
            .any(|c| matches!(c, RenderCall::DestroyIndicator(_))));
    }

    #[test]
    fn test_selection_cycles_through_palette() {
        let mut session = flat_session(0, false);
        let len = session.palette().len() as i32;
        assert_eq!(session.cycle_block_type(-1), BlockType::Rock);
        assert_eq!(session.cycle_block_type(1), BlockType::Grass);
        for _ in 0..len {
            session.cycle_block_type(1);
        }
        assert_eq!(session.selected_block(), BlockType::Grass);
    }

    #[test]
    fn test_digging_surface_lowers_column() {
        let mut session = flat_session(3, true);
        // Cursor starts at y = 0; stack up to the top voxel of column (0, 0).
        session.key_down(Key::PageUp).expect("key");
        session.key_down(Key::PageUp).expect("key");
        assert_eq!(session.cursor().position(), IVec3::new(0, 2, 0));

        assert_eq!(
            session.remove_at_cursor().expect("remove"),
            Some(BlockType::Grass)
        );
        assert_eq!(session.height_field().height_at(0, 0), Ok(2));

        // The avatar standing there drops onto the new surface.
        for _ in 0..60 {
            session.frame(1.0 / 60.0).expect("frame");
        }
        assert!(session.avatar().is_grounded());
        assert_eq!(session.avatar().position().y, 3.0);
    }

    #[test]
    fn test_digging_below_surface_keeps_height() {
        let mut session = flat_session(3, true);
        session.remove_at_cursor().expect("remove");
        assert_eq!(session.height_field().height_at(0, 0), Ok(3));
    }

    #[test]
    fn test_walk_clip_follows_movement_keys() {
        let mut session = flat_session(0, false);
        session.backend_mut().take_calls();

        session.key_down(Key::W).expect("key");
        session.frame(1.0 / 60.0).expect("frame");
        session.frame(1.0 / 60.0).expect("frame");
        session.key_up(Key::W);
        session.frame(1.0 / 60.0).expect("frame");

        let clips: Vec<RenderCall> = session
            .backend_mut()
            .take_calls()
            .into_iter()
            .filter(|c| matches!(c, RenderCall::PlayClip(_) | RenderCall::StopClip(_)))
            .collect();
        assert_eq!(
            clips,
            vec![
                RenderCall::PlayClip(WALK_CLIP.to_string()),
                RenderCall::StopClip(WALK_CLIP.to_string()),
            ]
        );
    }

    #[test]
    fn test_jump_scenario_on_flat_terrain() {
        let mut session = flat_session(5, false);
        assert_eq!(session.avatar().position().y, 6.0);
        session.key_down(Key::Space).expect("key");
        session.key_up(Key::Space);
        let mut frames = 0;
        loop {
            session.frame(1.0 / 60.0).expect("frame");
            frames += 1;
            if session.avatar().is_grounded() {
                break;
            }
            assert!(frames < 600, "avatar never landed");
        }
        assert_eq!(session.avatar().position().y, 6.0);
    }

    #[test]
    fn test_large_frame_delta_is_clamped() {
        let mut session = flat_session(0, false);
        session.key_down(Key::W).expect("key");
        session.frame(10.0).expect("frame");
        // One clamped step of 0.1 s at walk speed 7.
        assert!((session.avatar().position().z + 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_camera_follows_avatar() {
        let mut session = flat_session(0, false);
        session.key_down(Key::W).expect("key");
        for _ in 0..10 {
            session.frame(1.0 / 60.0).expect("frame");
        }
        let (_, target) = session.backend().camera();
        let avatar = session.avatar().position();
        assert!((target - avatar).y == 1.0);
        assert!((target.z - avatar.z).abs() < 1e-6);
    }

    #[test]
    fn test_export_reset_import_round_trip() {
        let mut session = flat_session(2, true);
        session.key_down(Key::PageUp).expect("key");
        session.key_down(Key::PageUp).expect("key");
        session.key_down(Key::Q).expect("key");
        let before = session.world().len();
        let json = session.export_world().expect("export");

        assert_eq!(session.reset_world().expect("reset"), before);
        assert_eq!(session.backend().live_meshes(), 0);
        assert_eq!(session.height_field().height_at(0, 0), Ok(0));

        assert_eq!(session.import_world(&json).expect("import"), before);
        assert_eq!(session.world().len(), before);
        assert_eq!(session.backend().live_meshes(), before);

        // Collision follows the restored terrain, and the placed block on
        // top of column (0, 0) counts too.
        assert_eq!(session.height_field().height_at(0, 0), Ok(3));
        assert_eq!(session.height_field().height_at(1, 1), Ok(2));
        for _ in 0..120 {
            session.frame(1.0 / 60.0).expect("frame");
        }
        assert!(session.avatar().is_grounded());
        assert_eq!(session.avatar().position().y, 4.0);
    }

    #[test]
    fn test_selected_block_follows_palette_order() {
        let mut session = flat_session(0, false);
        let palette: Vec<BlockType> = session.palette().iter().map(|d| d.block).collect();
        for expected in palette.iter().skip(1) {
            assert_eq!(session.cycle_block_type(1), *expected);
        }
        assert_eq!(session.cycle_block_type(1), palette[0]);
    }

    #[test]
    fn test_bad_import_changes_nothing() {
        let mut session = flat_session(1, true);
        let before = session.world().len();
        let json = r#"[
            {"position": {"x": 9, "y": 9, "z": 9}, "blockType": "wood"},
            {"position": {"x": 9, "y": 10, "z": 9}, "blockType": "lava"}
        ]"#;
        let result = session.import_world(json);
        assert!(matches!(
            result,
            Err(SessionError::Persist(PersistError::MalformedSaveRecord {
                index: 1,
                ..
            }))
        ));
        assert_eq!(session.world().len(), before);
    }

    #[test]
    fn test_stamp_tree_structure() {
        let mut session = flat_session(1, true);
        let records = blockcraft_persist::from_json(include_str!(
            "../../../data/structures/tree_a3.json"
        ))
        .expect("prefab parses");
        let placed = session.stamp_structure(&records, IVec3::new(3, 1, 3));
        assert_eq!(placed, records.len());
        assert_eq!(
            session.world().get(IVec3::new(3, 1, 3)),
            Some(BlockType::Log)
        );
        assert_eq!(session.backend().live_meshes(), session.world().len());
    }
}
