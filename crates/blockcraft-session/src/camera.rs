use blockcraft_core::config::CameraConfig;
use blockcraft_core::constants::CAMERA_TARGET_LIFT;
use glam::{Mat4, Quat, Vec3};

/// Third-person orbit camera that keeps its target on the avatar.
pub struct FollowCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub fov_y_rad: f32,
}

impl FollowCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: config
                .distance
                .clamp(config.min_distance, config.max_distance),
            yaw: config.yaw,
            pitch: config.pitch,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            fov_y_rad: std::f32::consts::FRAC_PI_4,
        }
    }

    /// Track the avatar, looking slightly above its center.
    pub fn follow(&mut self, avatar: Vec3) {
        self.target = avatar + Vec3::Y * CAMERA_TARGET_LIFT;
    }

    pub fn eye_position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Yaw of the horizontal view direction. Movement keys are resolved
    /// relative to this.
    pub fn view_yaw(&self) -> f32 {
        self.yaw
    }

    /// Horizontal unit vector the camera looks along.
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::NEG_Z
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * 0.005;
        self.pitch = (self.pitch + dy * 0.005).clamp(0.05, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta * self.distance * 0.1)
            .clamp(self.min_distance, self.max_distance);
    }

    pub fn view_proj(&self, width: f32, height: f32) -> Mat4 {
        let eye = self.eye_position();
        let view = Mat4::look_at_rh(eye, self.target, Vec3::Y);
        let aspect = width / height;
        let proj = Mat4::perspective_rh(self.fov_y_rad, aspect, 0.1, 1000.0);
        proj * view
    }
}
