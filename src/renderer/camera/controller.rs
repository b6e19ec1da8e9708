use super::CameraState;
use super::input::{DragMode, DragState, InputEvent, PointerButton};
use crate::error::ConfigError;
use crate::settings::CameraConfig;
use nalgebra_glm as glm;

/// Radius change per unit of scroll, as a fraction of the current radius.
const ZOOM_STEP: f32 = 0.1;
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Everything needed to build a look-at transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub eye: glm::Vec3,
    pub target: glm::Vec3,
    pub up: glm::Vec3,
}

impl ViewTransform {
    pub fn matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.eye, &self.target, &self.up)
    }
}

/// Handles camera input and transformations
pub struct CameraController {
    config: CameraConfig,
    state: CameraState,
    drag: DragState,
    last_pointer: Option<(f64, f64)>,
}

impl CameraController {
    /// Fails when the config is inconsistent; the home pose must already lie
    /// within the clamp bounds, so reset never leaves them.
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CameraState::new(config.home),
            config,
            drag: DragState::Idle,
            last_pointer: None,
        })
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Single entry point for all camera input.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y),
            InputEvent::ButtonChanged { button, pressed } => self.on_button(button, pressed),
            InputEvent::Scrolled { amount } => self.zoom(amount),
            InputEvent::ResetRequested => self.reset(),
        }
    }

    fn on_button(&mut self, button: PointerButton, pressed: bool) {
        let mode = DragMode::from(button);
        match (self.drag, pressed) {
            (DragState::Idle, true) => {
                log::trace!("Drag started: {mode:?}");
                self.drag = DragState::Dragging { mode };
            }
            (DragState::Dragging { mode: active }, false) if active == mode => {
                log::trace!("Drag ended: {mode:?}");
                self.drag = DragState::Idle;
            }
            // The first held button keeps control until it is released.
            _ => {}
        }
    }

    fn on_pointer_moved(&mut self, x: f64, y: f64) {
        if let (DragState::Dragging { mode }, Some((last_x, last_y))) =
            (self.drag, self.last_pointer)
        {
            let dx = (x - last_x) as f32;
            // Screen y grows downward; dragging up is positive.
            let dy = (last_y - y) as f32;
            match mode {
                DragMode::Orbit => self.orbit(dx, dy),
                DragMode::Pan => self.pan(dx, dy),
                DragMode::VerticalPan => self.pan(0.0, dy),
            }
        }
        self.last_pointer = Some((x, y));
    }

    /// Rotate camera around target
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.state.angle_h += dx * self.config.orbit_sensitivity;
        self.state.angle_v = (self.state.angle_v + dy * self.config.orbit_sensitivity)
            .clamp(self.config.vertical_angle_min, self.config.vertical_angle_max);
        self.state.update_eye();
    }

    /// Pan camera and target together across the view plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let Some((right, up)) = self.pan_basis() else {
            log::debug!("Skipping pan: eye coincides with target");
            return;
        };

        let pan_scale = self.state.radius * self.config.pan_sensitivity;
        let mut movement = (-right * dx + up * dy) * pan_scale;
        if self.config.level_pan {
            movement.y = 0.0;
        }

        self.state.target += movement;
        self.state.update_eye();
    }

    /// Camera right/up vectors, or `None` when the view direction is undefined.
    fn pan_basis(&self) -> Option<(glm::Vec3, glm::Vec3)> {
        let offset = self.state.target - self.state.eye();
        let length = glm::length(&offset);
        if length < DEGENERATE_EPSILON {
            return None;
        }
        let forward = offset / length;

        let world_up = glm::vec3(0.0, 1.0, 0.0);
        let mut right = glm::cross(&forward, &world_up);
        if glm::length(&right) < DEGENERATE_EPSILON {
            // Looking straight along world up: take right from the horizontal angle.
            let (sin_h, cos_h) = self.state.angle_h.to_radians().sin_cos();
            right = glm::vec3(sin_h, 0.0, -cos_h);
        }
        let right = glm::normalize(&right);
        let up = glm::normalize(&glm::cross(&right, &forward));
        Some((right, up))
    }

    /// Move toward or away from the target by a fraction of the current radius
    pub fn zoom(&mut self, amount: f32) {
        let radius = self.state.radius - amount * self.state.radius * ZOOM_STEP;
        self.state.radius = radius.clamp(self.config.min_radius, self.config.max_radius);
        self.state.update_eye();
    }

    /// Reset camera to defaults
    pub fn reset(&mut self) {
        self.state.reset();
        self.drag = DragState::Idle;
        log::debug!("Camera reset to home pose");
    }

    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            eye: self.state.eye(),
            target: self.state.target(),
            up: glm::vec3(0.0, 1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::state::{HomePose, spherical_offset};

    fn controller() -> CameraController {
        CameraController::new(CameraConfig::default()).unwrap()
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "expected {b}, got {a}");
    }

    fn assert_eye_consistent(c: &CameraController) {
        let (h, v) = c.state().get_orientation();
        let expected = c.state().target() + spherical_offset(c.state().radius(), h, v);
        assert!((c.state().eye() - expected).norm() < 1e-4);
    }

    fn press(c: &mut CameraController, button: PointerButton) {
        c.handle_input(InputEvent::ButtonChanged { button, pressed: true });
    }

    fn release(c: &mut CameraController, button: PointerButton) {
        c.handle_input(InputEvent::ButtonChanged { button, pressed: false });
    }

    fn move_to(c: &mut CameraController, x: f64, y: f64) {
        c.handle_input(InputEvent::PointerMoved { x, y });
    }

    #[test]
    fn orbit_scales_by_sensitivity() {
        let mut c = controller();
        c.orbit(20.0, -10.0);
        let (h, v) = c.state().get_orientation();
        assert_close(h, 10.0);
        assert_close(v, 40.0);
        assert_eye_consistent(&c);
    }

    #[test]
    fn orbit_clamps_elevation() {
        let mut c = controller();
        for dy in [1000.0, -5000.0, 37.0, 1e9, -1e9, 0.0] {
            c.orbit(3.0, dy);
            let (_, v) = c.state().get_orientation();
            assert!((0.0..=89.0).contains(&v), "elevation {v} escaped bounds");
        }
        c.orbit(0.0, 1000.0);
        assert_eq!(c.state().get_orientation().1, 89.0);
        c.orbit(0.0, -1000.0);
        assert_eq!(c.state().get_orientation().1, 0.0);
    }

    #[test]
    fn orbit_respects_symmetric_bounds() {
        let mut c = CameraController::new(CameraConfig {
            vertical_angle_min: -89.0,
            vertical_angle_max: 89.0,
            ..CameraConfig::default()
        })
        .unwrap();
        c.orbit(0.0, -1000.0);
        assert_eq!(c.state().get_orientation().1, -89.0);
        assert_eye_consistent(&c);
    }

    #[test]
    fn horizontal_angle_is_unbounded() {
        let mut c = controller();
        c.orbit(2000.0, 0.0);
        assert_close(c.state().get_orientation().0, 1000.0);
    }

    #[test]
    fn zoom_is_proportional_and_clamped() {
        let mut c = controller();
        c.zoom(1.0);
        assert_close(c.state().radius(), 18.0);
        c.zoom(-1.0);
        assert_close(c.state().radius(), 19.8);
        assert_eye_consistent(&c);

        for amount in [50.0, -50.0, 9.9, -1e6, 1e6, 0.0] {
            c.zoom(amount);
            let r = c.state().radius();
            assert!((1.0..=100.0).contains(&r), "radius {r} escaped bounds");
        }
        c.zoom(100.0);
        assert_eq!(c.state().radius(), 1.0);
        c.zoom(-1000.0);
        assert_eq!(c.state().radius(), 100.0);
    }

    #[test]
    fn pan_preserves_distance_and_angles() {
        let mut c = controller();
        let before = c.state().get_orientation();
        c.pan(12.0, -7.0);
        assert_eq!(c.state().get_orientation(), before);
        assert_close(glm::distance(&c.state().eye(), &c.state().target()), 20.0);
        assert_eye_consistent(&c);
        assert!(c.state().target().norm() > 0.0);
    }

    #[test]
    fn level_pan_keeps_target_on_ground() {
        let mut c = controller();
        c.pan(4.0, 9.0);
        assert_eq!(c.state().target().y, 0.0);
    }

    #[test]
    fn pan_direction_follows_camera_basis() {
        // Home view looks from +X toward the origin; camera right is -Z.
        let mut c = controller();
        c.pan(1.0, 0.0);
        let target = c.state().target();
        assert_close(target.z, 1.0);
        assert_close(target.x, 0.0);
    }

    #[test]
    fn free_pan_moves_along_camera_up() {
        let mut c = CameraController::new(CameraConfig {
            level_pan: false,
            ..CameraConfig::default()
        })
        .unwrap();
        c.pan(0.0, 1.0);
        assert!(c.state().target().y > 0.0);
        assert_eye_consistent(&c);
    }

    #[test]
    fn pan_looking_straight_down_stays_finite() {
        let mut c = CameraController::new(CameraConfig {
            level_pan: false,
            ..CameraConfig::default()
        })
        .unwrap();
        c.state.angle_v = 90.0;
        c.state.update_eye();
        c.pan(3.0, 2.0);
        let target = c.state().target();
        assert!(target.iter().all(|v| v.is_finite()));
        assert!(target.norm() > 0.0);
        assert!(c.state().eye().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn pan_skipped_when_eye_sits_on_target() {
        let mut c = controller();
        c.state.radius = 0.0;
        c.state.update_eye();
        assert_eq!(c.state().eye(), c.state().target());

        c.pan(5.0, 5.0);
        let target = c.state().target();
        assert_eq!(target, glm::Vec3::zeros());
        assert!(target.iter().all(|v| v.is_finite()));
        assert!(c.state().eye().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let inverted = CameraConfig {
            min_radius: 50.0,
            max_radius: 10.0,
            ..CameraConfig::default()
        };
        assert!(matches!(
            CameraController::new(inverted),
            Err(ConfigError::RadiusRange { .. })
        ));

        let home_outside = CameraConfig {
            home: HomePose {
                radius: 500.0,
                ..HomePose::default()
            },
            ..CameraConfig::default()
        };
        assert!(matches!(
            CameraController::new(home_outside),
            Err(ConfigError::HomeRadius { .. })
        ));
    }

    #[test]
    fn reset_returns_to_configured_home() {
        let home = HomePose {
            target: [2.0, 0.0, -3.0],
            radius: 30.0,
            angle_h: 120.0,
            angle_v: 10.0,
        };
        let mut c = CameraController::new(CameraConfig {
            home,
            ..CameraConfig::default()
        })
        .unwrap();
        let start = c.state().clone();
        c.orbit(80.0, 40.0);
        c.zoom(-4.0);
        c.reset();
        assert_eq!(c.state(), &start);
        assert_eq!(c.state().radius(), 30.0);
        assert_eq!(c.state().get_orientation(), (120.0, 10.0));
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut c = controller();
        c.orbit(50.0, 30.0);
        c.pan(5.0, 5.0);
        c.zoom(3.0);
        c.reset();
        let once = c.state().clone();
        c.reset();
        assert_eq!(c.state(), &once);
        assert_eq!(c.state().target(), glm::Vec3::zeros());
        assert_eq!(c.state().radius(), 20.0);
        assert_eq!(c.state().get_orientation(), (0.0, 45.0));
    }

    #[test]
    fn same_inputs_give_same_eye() {
        let mut a = controller();
        let mut b = controller();
        for c in [&mut a, &mut b] {
            c.orbit(13.0, 7.5);
            c.zoom(0.7);
            c.pan(-4.0, 2.0);
            c.orbit(-300.0, -20.0);
            c.zoom(-2.0);
        }
        assert!((a.state().eye() - b.state().eye()).norm() < 1e-6);
    }

    #[test]
    fn left_drag_orbits() {
        let mut c = controller();
        move_to(&mut c, 100.0, 100.0);
        press(&mut c, PointerButton::Left);
        assert_eq!(c.drag_state(), DragState::Dragging { mode: DragMode::Orbit });
        move_to(&mut c, 120.0, 90.0);
        let (h, v) = c.state().get_orientation();
        assert_close(h, 10.0);
        assert_close(v, 50.0);
        release(&mut c, PointerButton::Left);
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn moves_without_drag_only_track_pointer() {
        let mut c = controller();
        let before = c.state().clone();
        move_to(&mut c, 10.0, 10.0);
        move_to(&mut c, 500.0, 300.0);
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn first_move_after_press_needs_known_pointer() {
        let mut c = controller();
        press(&mut c, PointerButton::Left);
        let before = c.state().clone();
        move_to(&mut c, 640.0, 360.0);
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn first_held_button_governs() {
        let mut c = controller();
        move_to(&mut c, 0.0, 0.0);
        press(&mut c, PointerButton::Middle);
        press(&mut c, PointerButton::Left);
        assert_eq!(c.drag_state(), DragState::Dragging { mode: DragMode::Pan });

        release(&mut c, PointerButton::Left);
        assert_eq!(c.drag_state(), DragState::Dragging { mode: DragMode::Pan });

        move_to(&mut c, 10.0, 0.0);
        assert_eq!(c.state().get_orientation(), (0.0, 45.0));
        assert!(c.state().target().norm() > 0.0);

        release(&mut c, PointerButton::Middle);
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn right_drag_ignores_horizontal_motion() {
        let mut c = controller();
        move_to(&mut c, 50.0, 50.0);
        press(&mut c, PointerButton::Right);
        move_to(&mut c, 90.0, 50.0);
        assert_eq!(c.state().target(), glm::Vec3::zeros());
        move_to(&mut c, 90.0, 40.0);
        assert!(c.state().target().norm() > 0.0);
        assert_eq!(c.state().target().y, 0.0);
    }

    #[test]
    fn scroll_and_reset_events() {
        let mut c = controller();
        c.handle_input(InputEvent::Scrolled { amount: 2.0 });
        assert_close(c.state().radius(), 16.0);
        move_to(&mut c, 0.0, 0.0);
        press(&mut c, PointerButton::Left);
        c.handle_input(InputEvent::ResetRequested);
        assert_eq!(c.drag_state(), DragState::Idle);
        assert_eq!(c.state().radius(), 20.0);
    }

    #[test]
    fn view_transform_reports_current_pose() {
        let mut c = controller();
        c.pan(3.0, 0.0);
        let view = c.view_transform();
        assert_eq!(view.eye, c.state().eye());
        assert_eq!(view.target, c.state().target());
        assert_eq!(view.up, glm::vec3(0.0, 1.0, 0.0));

        let target = view.target;
        let target_in_view = view.matrix() * glm::vec4(target.x, target.y, target.z, 1.0);
        assert_close(target_in_view.x, 0.0);
        assert_close(target_in_view.y, 0.0);
        assert_close(target_in_view.z, -20.0);
    }
}
