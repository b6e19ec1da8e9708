use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

/// Pose the camera starts in and returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomePose {
    pub target: [f32; 3],
    pub radius: f32,
    pub angle_h: f32,
    pub angle_v: f32,
}

impl Default for HomePose {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            radius: 20.0,
            angle_h: 0.0,
            angle_v: 45.0,
        }
    }
}

/// Orbit camera state: a target, a radius and two angles in degrees.
///
/// The eye position is derived from the other four values and recomputed
/// after every mutation, so it never drifts from the spherical definition.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub(super) target: glm::Vec3,
    pub(super) radius: f32,
    pub(super) angle_h: f32,
    pub(super) angle_v: f32,
    eye: glm::Vec3,
    home: HomePose,
}

impl CameraState {
    pub fn new(home: HomePose) -> Self {
        let mut state = Self {
            target: glm::make_vec3(&home.target),
            radius: home.radius,
            angle_h: home.angle_h,
            angle_v: home.angle_v,
            eye: glm::Vec3::zeros(),
            home,
        };
        state.update_eye();
        state
    }

    pub fn reset(&mut self) {
        self.target = glm::make_vec3(&self.home.target);
        self.radius = self.home.radius;
        self.angle_h = self.home.angle_h;
        self.angle_v = self.home.angle_v;
        self.update_eye();
    }

    pub(super) fn update_eye(&mut self) {
        self.eye = self.target + spherical_offset(self.radius, self.angle_h, self.angle_v);
    }

    pub fn target(&self) -> glm::Vec3 {
        self.target
    }

    pub fn eye(&self) -> glm::Vec3 {
        self.eye
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn get_orientation(&self) -> (f32, f32) {
        (self.angle_h, self.angle_v)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(HomePose::default())
    }
}

/// Offset from target to eye for a Y-up orbit. `angle_h` sweeps the XZ plane
/// starting at +X, `angle_v` lifts toward +Y.
pub fn spherical_offset(radius: f32, angle_h: f32, angle_v: f32) -> glm::Vec3 {
    let (sin_v, cos_v) = angle_v.to_radians().sin_cos();
    let (sin_h, cos_h) = angle_h.to_radians().sin_cos();
    let radius_xz = radius * cos_v;
    glm::vec3(radius_xz * cos_h, radius * sin_v, radius_xz * sin_h)
}
