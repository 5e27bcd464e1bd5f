use blockcraft_core::config::LocomotionConfig;
use blockcraft_core::error::BlockcraftError;
use blockcraft_core::types::{column_at, ColumnCoord};
use blockcraft_world::HeightField;
use glam::{Quat, Vec3};
use std::f32::consts::{PI, TAU};

use crate::input::MovementKeys;

/// Vertical state of the avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionState {
    Grounded,
    Airborne { vertical_velocity: f32 },
}

/// What happened during one locomotion tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A movement key was held.
    pub walking: bool,
    /// The horizontal move was rejected by terrain or the field edge.
    pub blocked: bool,
    /// The avatar touched down this tick.
    pub landed: bool,
}

/// Continuous avatar movement over a height field.
///
/// Position is the avatar's center; a grounded avatar rests at
/// `ground + half_height`. Horizontal moves into a column whose ground is
/// above the avatar's feet are rejected outright.
#[derive(Debug, Clone)]
pub struct AvatarLocomotion {
    params: LocomotionConfig,
    position: Vec3,
    /// Yaw in radians; 0 faces -Z.
    facing: f32,
    state: MotionState,
}

impl AvatarLocomotion {
    /// Stand the avatar on the ground of a column.
    pub fn spawn(
        params: LocomotionConfig,
        field: &HeightField,
        column: ColumnCoord,
    ) -> Result<Self, BlockcraftError> {
        let ground = field.height_at(column.x, column.y)?;
        let position = Vec3::new(
            column.x as f32,
            ground as f32 + params.half_height,
            column.y as f32,
        );
        log::info!("Avatar spawned at {position}");
        Ok(Self {
            params,
            position,
            facing: 0.0,
            state: MotionState::Grounded,
        })
    }

    /// Launch upward. Only possible while grounded.
    pub fn jump(&mut self) -> bool {
        if self.state != MotionState::Grounded {
            return false;
        }
        self.state = MotionState::Airborne {
            vertical_velocity: self.params.jump_velocity,
        };
        log::debug!("Jump from {}", self.position);
        true
    }

    /// Advance by `dt` seconds: horizontal movement first, then vertical.
    pub fn tick(
        &mut self,
        field: &HeightField,
        keys: MovementKeys,
        view_yaw: f32,
        dt: f32,
    ) -> Result<TickOutcome, BlockcraftError> {
        let mut outcome = TickOutcome::default();

        if let Some(offset) = keys.direction_offset() {
            outcome.walking = true;
            let heading = wrap_angle(view_yaw + offset);
            self.facing = turn_towards(self.facing, heading, self.params.turn_rate);

            let step = Quat::from_rotation_y(heading) * Vec3::NEG_Z * self.params.walk_speed * dt;
            let candidate = self.position + step;
            if self.can_stand_over(field, candidate) {
                self.position = candidate;
            } else {
                outcome.blocked = true;
                log::trace!("Move to {candidate} blocked");
            }
        }

        let column = column_at(self.position);
        let ground = field.height_at(column.x, column.y)? as f32;
        let rest_y = ground + self.params.half_height;

        if self.state == MotionState::Grounded {
            if self.position.y > rest_y {
                // Walked off a ledge or the ground was dug out.
                self.state = MotionState::Airborne {
                    vertical_velocity: 0.0,
                };
            } else {
                self.position.y = rest_y;
            }
        }

        if let MotionState::Airborne { vertical_velocity } = self.state {
            let velocity = vertical_velocity + self.params.gravity * dt;
            self.position.y += velocity * dt;
            // Only a falling avatar can land; a fresh jump stays airborne
            // through a zero-length tick.
            if velocity <= 0.0 && self.position.y <= rest_y {
                self.position.y = rest_y;
                self.state = MotionState::Grounded;
                outcome.landed = true;
                log::trace!("Landed at {}", self.position);
            } else {
                self.state = MotionState::Airborne {
                    vertical_velocity: velocity,
                };
            }
        }

        Ok(outcome)
    }

    /// A move is allowed when the destination column exists and its ground
    /// is no higher than the avatar's feet there.
    fn can_stand_over(&self, field: &HeightField, candidate: Vec3) -> bool {
        let column = column_at(candidate);
        match field.height_at(column.x, column.y) {
            Ok(ground) => ground as f32 <= candidate.y - self.params.half_height,
            Err(_) => false,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.state == MotionState::Grounded
    }

    /// Vertical velocity; zero while grounded.
    pub fn vertical_velocity(&self) -> f32 {
        match self.state {
            MotionState::Grounded => 0.0,
            MotionState::Airborne { vertical_velocity } => vertical_velocity,
        }
    }

    pub fn params(&self) -> &LocomotionConfig {
        &self.params
    }
}

/// Wrap an angle into `[-PI, PI)`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Rotate `current` towards `target` by at most `max_step`, the short way.
pub fn turn_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_angle(target - current);
    if diff.abs() <= max_step {
        wrap_angle(target)
    } else {
        wrap_angle(current + max_step.copysign(diff))
    }
}
