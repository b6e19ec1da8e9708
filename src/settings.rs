use crate::CONFY_APP_NAME;
use crate::error::{CadError, ConfigError};
use crate::renderer::camera::{HomePose, Projection};

use serde::{Deserialize, Serialize};

/// Navigation tuning, clamp bounds and projection parameters for the orbit camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Degrees of orbit per pixel of pointer drag.
    pub orbit_sensitivity: f32,
    /// Pan distance per pixel, as a fraction of the orbit radius.
    pub pan_sensitivity: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub vertical_angle_min: f32,
    pub vertical_angle_max: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Drop the world-up component of pan movement so the target stays on its ground plane.
    pub level_pan: bool,
    pub top_threshold: f32,
    pub bottom_threshold: f32,
    pub home: HomePose,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.5,
            pan_sensitivity: 0.05,
            min_radius: 1.0,
            max_radius: 100.0,
            vertical_angle_min: 0.0,
            vertical_angle_max: 89.0,
            field_of_view: Projection::DEFAULT_FOV_Y,
            near_plane: Projection::DEFAULT_NEAR,
            far_plane: Projection::DEFAULT_FAR,
            level_pan: true,
            top_threshold: 60.0,
            bottom_threshold: -60.0,
            home: HomePose::default(),
        }
    }
}

impl CameraConfig {
    pub fn load() -> Result<Self, CadError> {
        let config = match confy::load::<Self>(CONFY_APP_NAME, "camera") {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to read camera config, using defaults: {e}");
                Self::default()
            }
        };
        config
            .validate()
            .map_err(|e| CadError::from(e).with_arg("section", "camera"))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("orbit_sensitivity", self.orbit_sensitivity)?;
        positive("pan_sensitivity", self.pan_sensitivity)?;
        positive("min_radius", self.min_radius)?;
        positive("max_radius", self.max_radius)?;
        positive("near_plane", self.near_plane)?;
        positive("far_plane", self.far_plane)?;

        if self.min_radius > self.max_radius {
            return Err(ConfigError::RadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        // The poles are excluded: the look-at up vector is parallel to the view there.
        for value in [self.vertical_angle_min, self.vertical_angle_max] {
            if !(value > -90.0 && value < 90.0) {
                return Err(ConfigError::ElevationOutOfRange { value });
            }
        }
        if self.vertical_angle_min > self.vertical_angle_max {
            return Err(ConfigError::ElevationRange {
                min: self.vertical_angle_min,
                max: self.vertical_angle_max,
            });
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(ConfigError::FieldOfView(self.field_of_view));
        }
        if self.far_plane <= self.near_plane {
            return Err(ConfigError::ClipPlanes {
                near: self.near_plane,
                far: self.far_plane,
            });
        }
        if !(self.top_threshold > self.bottom_threshold) {
            return Err(ConfigError::Thresholds {
                top: self.top_threshold,
                bottom: self.bottom_threshold,
            });
        }
        if !(self.min_radius..=self.max_radius).contains(&self.home.radius) {
            return Err(ConfigError::HomeRadius {
                radius: self.home.radius,
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.vertical_angle_min..=self.vertical_angle_max).contains(&self.home.angle_v) {
            return Err(ConfigError::HomeElevation {
                angle: self.home.angle_v,
                min: self.vertical_angle_min,
                max: self.vertical_angle_max,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_grid: bool,
    pub show_axes: bool,
    pub show_labels: bool,
    pub start_fullscreen: bool,
    /// Half extent of the ground grid in world units.
    pub grid_size: i32,
    pub grid_spacing: i32,
    pub major_grid_spacing: i32,
    pub axis_length: i32,
    pub tick_spacing: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
            show_labels: true,
            start_fullscreen: true,
            grid_size: 100,
            grid_spacing: 1,
            major_grid_spacing: 10,
            axis_length: 100,
            tick_spacing: 10,
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_else(|e| {
            log::warn!("Failed to read display settings, using defaults: {e}");
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "display", self) {
            log::warn!("Failed to save display settings: {e}");
        }
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub camera: CameraConfig,
    pub display: DisplaySettings,
}

impl Settings {
    pub fn load() -> Result<Self, CadError> {
        Ok(Self {
            camera: CameraConfig::load()?,
            display: DisplaySettings::load(),
        })
    }
}
