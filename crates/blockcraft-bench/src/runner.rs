use std::time::Instant;

use blockcraft_core::block::Palette;
use blockcraft_session::{HeadlessBackend, Key, Session, SessionError};
use blockcraft_world::{populate_terrain, HeightField, VoxelWorld};

use crate::scenes::{scene_column_count, scene_world_config, SceneConfig, SceneKind};

/// Simulated frame step for locomotion scenes.
const FRAME_DT: f32 = 1.0 / 60.0;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub voxel_count: u32,
    pub column_count: u32,
    pub tick_count: u32,
    pub timings: TimingSeries,
}

/// Runs headless benchmark scenes against the built-in palette.
pub struct BenchmarkRunner {
    palette: Palette,
    tick_count: u32,
}

impl BenchmarkRunner {
    pub fn new(tick_count: u32) -> Result<Self, SessionError> {
        let palette = blockcraft_data::defaults::builtin_palette()?;
        Ok(Self {
            palette,
            tick_count,
        })
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> Result<BenchmarkResult, SessionError> {
        log::info!(
            "Running scene '{}' ({} columns)...",
            config.name,
            scene_column_count(config)
        );

        let (frame_times, voxel_count) = match config.kind {
            SceneKind::TerrainGeneration => self.run_terrain(config)?,
            SceneKind::Locomotion => self.run_locomotion(config)?,
            SceneKind::Editing => self.run_editing(config)?,
            SceneKind::SaveLoad => self.run_save_load(config)?,
        };

        let timings = compute_timings(&frame_times);
        log::info!(
            "  Done: mean={:.2}ms, p95={:.2}ms, p99={:.2}ms",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        Ok(BenchmarkResult {
            scene_name: config.name.to_string(),
            voxel_count: voxel_count as u32,
            column_count: scene_column_count(config),
            tick_count: self.tick_count,
            timings,
        })
    }

    fn session(&self, config: &SceneConfig) -> Result<Session<HeadlessBackend>, SessionError> {
        Session::new(
            scene_world_config(config),
            self.palette.clone(),
            HeadlessBackend::quiet(),
        )
    }

    fn run_terrain(&self, config: &SceneConfig) -> Result<(Vec<f64>, usize), SessionError> {
        let world_config = scene_world_config(config);
        let mut frame_times = Vec::with_capacity(self.tick_count as usize);
        let mut voxels = 0;

        for _ in 0..self.tick_count {
            let start = Instant::now();
            let field = HeightField::generate(&world_config.terrain)?;
            let mut world = VoxelWorld::untracked();
            voxels = populate_terrain(&mut world, &field);
            frame_times.push(elapsed_ms(start));
        }
        Ok((frame_times, voxels))
    }

    fn run_locomotion(&self, config: &SceneConfig) -> Result<(Vec<f64>, usize), SessionError> {
        let mut session = self.session(config)?;
        let mut frame_times = Vec::with_capacity(self.tick_count as usize);

        session.key_down(Key::W)?;
        for tick in 0..self.tick_count {
            session.camera_mut().orbit(4.0, 0.0);
            if tick % 90 == 0 {
                session.key_down(Key::Space)?;
            }
            let start = Instant::now();
            session.frame(FRAME_DT)?;
            frame_times.push(elapsed_ms(start));
        }
        session.key_up(Key::W);
        Ok((frame_times, session.world().len()))
    }

    fn run_editing(&self, config: &SceneConfig) -> Result<(Vec<f64>, usize), SessionError> {
        let mut session = self.session(config)?;
        let mut frame_times = Vec::with_capacity(self.tick_count as usize);
        let sweep = [Key::ArrowRight, Key::ArrowUp, Key::ArrowLeft, Key::ArrowDown];

        for tick in 0..self.tick_count as usize {
            let start = Instant::now();
            session.key_down(sweep[(tick / 8) % sweep.len()])?;
            session.key_down(Key::PageUp)?;
            session.key_down(Key::Q)?;
            session.key_down(Key::Period)?;
            session.key_down(Key::E)?;
            session.key_down(Key::PageDown)?;
            frame_times.push(elapsed_ms(start));
        }
        Ok((frame_times, session.world().len()))
    }

    fn run_save_load(&self, config: &SceneConfig) -> Result<(Vec<f64>, usize), SessionError> {
        let mut session = self.session(config)?;
        let mut frame_times = Vec::with_capacity(self.tick_count as usize);

        for _ in 0..self.tick_count {
            let start = Instant::now();
            let json = session.export_world()?;
            session.reset_world()?;
            session.import_world(&json)?;
            frame_times.push(elapsed_ms(start));
        }
        Ok((frame_times, session.world().len()))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
