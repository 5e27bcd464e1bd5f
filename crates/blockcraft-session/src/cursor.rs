use blockcraft_core::config::CursorConfig;
use blockcraft_core::direction::StepDirection;
use blockcraft_core::types::GridPosition;
use glam::IVec3;

/// Editing cursor: a grid cell inside a fixed box plus the selected block.
///
/// The cursor's height is its base level plus the size of a stack of height
/// indicators. Raising pushes one, lowering pops one.
#[derive(Debug, Clone)]
pub struct Cursor {
    base: IVec3,
    min: IVec3,
    max: IVec3,
    /// Y of each stacked indicator below the cursor, bottom first.
    height_stack: Vec<i32>,
    block_index: usize,
    palette_len: usize,
}

impl Cursor {
    /// Start position is clamped into the bounds.
    pub fn new(config: &CursorConfig, palette_len: usize) -> Self {
        let min = IVec3::from_array(config.min);
        let max = IVec3::from_array(config.max).max(min);
        Self {
            base: IVec3::from_array(config.start).clamp(min, max),
            min,
            max,
            height_stack: Vec::new(),
            block_index: 0,
            palette_len,
        }
    }

    /// Current cell.
    pub fn position(&self) -> GridPosition {
        self.base + IVec3::Y * self.height_stack.len() as i32
    }

    /// Move one cell horizontally. Steps that would leave the bounds are
    /// ignored. Returns whether the cursor moved.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        let next = self.base + direction.offset();
        if !self.contains(next) {
            return false;
        }
        self.base = next;
        true
    }

    /// Stack one level up. Ignored at the top bound.
    pub fn raise_height(&mut self) -> bool {
        let current = self.position();
        if current.y >= self.max.y {
            return false;
        }
        self.height_stack.push(current.y);
        true
    }

    /// Pop one level. Ignored when nothing is stacked.
    pub fn lower_height(&mut self) -> bool {
        self.height_stack.pop().is_some()
    }

    /// Number of stacked levels above the base.
    pub fn stack_height(&self) -> usize {
        self.height_stack.len()
    }

    /// Cells that show an indicator: every stacked level, then the cursor.
    pub fn indicator_positions(&self) -> Vec<GridPosition> {
        self.height_stack
            .iter()
            .map(|&y| IVec3::new(self.base.x, y, self.base.z))
            .chain(std::iter::once(self.position()))
            .collect()
    }

    /// Advance the selected palette index by `delta`, wrapping both ways.
    pub fn cycle_block_type(&mut self, delta: i32) -> usize {
        if self.palette_len > 0 {
            let len = self.palette_len as i64;
            self.block_index = (self.block_index as i64 + delta as i64).rem_euclid(len) as usize;
        }
        self.block_index
    }

    /// Selected palette index.
    pub fn block_index(&self) -> usize {
        self.block_index
    }

    /// Whether a cell lies within the cursor bounds.
    pub fn contains(&self, position: GridPosition) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }

    pub fn min(&self) -> GridPosition {
        self.min
    }

    pub fn max(&self) -> GridPosition {
        self.max
    }
}
