use std::fmt;

use crate::settings::CameraConfig;

/// Compass sector the camera is looking from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    Front,
    Right,
    Back,
    Left,
}

impl Cardinal {
    /// Sectors are 90 degrees wide with boundaries at 45, 135, 225 and 315.
    pub fn from_degrees(angle_h: f32) -> Self {
        let h = normalize_degrees(angle_h);
        if (45.0..135.0).contains(&h) {
            Cardinal::Right
        } else if (135.0..225.0).contains(&h) {
            Cardinal::Back
        } else if (225.0..315.0).contains(&h) {
            Cardinal::Left
        } else {
            Cardinal::Front
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cardinal::Front => "Front",
            Cardinal::Right => "Right",
            Cardinal::Back => "Back",
            Cardinal::Left => "Left",
        })
    }
}

/// Maps orbit angles to names like `Front` or `Top Left`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewClassifier {
    pub top_threshold: f32,
    pub bottom_threshold: f32,
}

impl Default for ViewClassifier {
    fn default() -> Self {
        Self {
            top_threshold: 60.0,
            bottom_threshold: -60.0,
        }
    }
}

impl ViewClassifier {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            top_threshold: config.top_threshold,
            bottom_threshold: config.bottom_threshold,
        }
    }

    pub fn classify(&self, angle_h: f32, angle_v: f32) -> String {
        let direction = Cardinal::from_degrees(angle_h);
        if angle_v >= self.top_threshold {
            format!("Top {direction}")
        } else if angle_v <= self.bottom_threshold {
            format!("Bottom {direction}")
        } else {
            direction.to_string()
        }
    }
}

/// Wraps an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360 and keeps -0.0
    if wrapped >= 360.0 { 0.0 } else { wrapped + 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(angle_h: f32, angle_v: f32) -> String {
        ViewClassifier::default().classify(angle_h, angle_v)
    }

    #[test]
    fn cardinal_sectors() {
        assert_eq!(classify(0.0, 45.0), "Front");
        assert_eq!(classify(90.0, 45.0), "Right");
        assert_eq!(classify(180.0, 45.0), "Back");
        assert_eq!(classify(270.0, 45.0), "Left");
    }

    #[test]
    fn sector_boundaries_belong_to_the_next_sector() {
        assert_eq!(classify(44.9, 0.0), "Front");
        assert_eq!(classify(45.0, 0.0), "Right");
        assert_eq!(classify(135.0, 0.0), "Back");
        assert_eq!(classify(225.0, 0.0), "Left");
        assert_eq!(classify(315.0, 0.0), "Front");
        assert_eq!(classify(359.9, 0.0), "Front");
    }

    #[test]
    fn angles_wrap() {
        assert_eq!(classify(-90.0, 10.0), "Left");
        assert_eq!(classify(450.0, 10.0), "Right");
        assert_eq!(classify(-720.0, 10.0), "Front");
    }

    #[test]
    fn elevation_qualifiers() {
        for h in [0.0, 90.0, 180.0, 270.0, -33.0, 1234.5] {
            assert!(classify(h, 75.0).starts_with("Top "));
            assert!(classify(h, -75.0).starts_with("Bottom "));
        }
        assert_eq!(classify(0.0, 60.0), "Top Front");
        assert_eq!(classify(0.0, 59.9), "Front");
        assert_eq!(classify(180.0, -60.0), "Bottom Back");
        assert_eq!(classify(180.0, -59.9), "Back");
    }

    #[test]
    fn thresholds_come_from_config() {
        let config = CameraConfig {
            top_threshold: 80.0,
            bottom_threshold: -10.0,
            ..CameraConfig::default()
        };
        let classifier = ViewClassifier::from_config(&config);
        assert_eq!(classifier.classify(90.0, 75.0), "Right");
        assert_eq!(classifier.classify(90.0, -15.0), "Bottom Right");
    }

    #[test]
    fn normalize_stays_in_range() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-45.0), 315.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-0.0).is_sign_positive());
        let tiny = normalize_degrees(-1e-8);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn quarter_turn_from_home_reads_right() {
        use crate::renderer::camera::CameraController;

        let config = CameraConfig::default();
        let mut controller = CameraController::new(config.clone()).unwrap();
        controller.orbit(90.0 / config.orbit_sensitivity, 0.0);
        let (h, v) = controller.state().get_orientation();
        assert_eq!(ViewClassifier::from_config(&config).classify(h, v), "Right");
    }
}
