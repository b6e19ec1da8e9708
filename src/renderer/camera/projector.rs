//! World to screen mapping for label placement.
//!
//! Follows the classic GL pipeline: view, perspective projection with a
//! `[-1, 1]` clip depth, perspective divide, then the viewport transform with
//! window depth in `[0, 1]` and the origin at the viewport's bottom-left.

use crate::error::ViewportError;
use crate::settings::CameraConfig;
use nalgebra_glm as glm;

/// Pixel rectangle the scene is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    pub fn aspect(&self) -> Result<f32, ViewportError> {
        if !(self.width > 0.0) {
            return Err(ViewportError::NonPositiveWidth(self.width));
        }
        if !(self.height > 0.0) {
            return Err(ViewportError::NonPositiveHeight(self.height));
        }
        Ok(self.width / self.height)
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        (self.x..=self.x + self.width).contains(&x) && (self.y..=self.y + self.height).contains(&y)
    }
}

/// Perspective projection parameters. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub const DEFAULT_FOV_Y: f32 = 45.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 1000.0;

    pub fn perspective(
        config: &CameraConfig,
        viewport: &ViewportRect,
    ) -> Result<Self, ViewportError> {
        Ok(Self {
            fov_y: config.field_of_view,
            aspect: viewport.aspect()?,
            near: config.near_plane,
            far: config.far_plane,
        })
    }

    pub fn matrix(&self) -> glm::Mat4 {
        glm::perspective(self.aspect, self.fov_y.to_radians(), self.near, self.far)
    }
}

/// Window-space position. `y` grows upward from the viewport's bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Text anchored at a world position, rebuilt every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationPoint {
    pub world_position: glm::Vec3,
    pub label: String,
    pub axis: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLabel<'a> {
    pub screen: ScreenPoint,
    pub label: &'a str,
    pub axis: Axis,
}

/// Project a world point to window coordinates.
/// Returns None if behind the camera, beyond the far plane or outside the viewport.
pub fn project(
    world: &glm::Vec3,
    view: &glm::Mat4,
    projection: &glm::Mat4,
    viewport: &ViewportRect,
) -> Option<ScreenPoint> {
    let clip = projection * view * glm::vec4(world.x, world.y, world.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }

    let ndc = clip.xyz() / clip.w;
    let screen = ScreenPoint {
        x: viewport.x + (ndc.x + 1.0) * 0.5 * viewport.width,
        y: viewport.y + (ndc.y + 1.0) * 0.5 * viewport.height,
        depth: (ndc.z + 1.0) * 0.5,
    };

    if screen.depth >= 1.0 || !viewport.contains(screen.x, screen.y) {
        return None;
    }
    Some(screen)
}

/// Project a batch of annotations, keeping only the visible ones.
pub fn project_annotations<'a>(
    points: &'a [AnnotationPoint],
    view: &glm::Mat4,
    projection: &glm::Mat4,
    viewport: &ViewportRect,
) -> Vec<PlacedLabel<'a>> {
    let view_projection = projection * view;
    let identity = glm::Mat4::identity();
    points
        .iter()
        .filter_map(|point| {
            project(&point.world_position, &identity, &view_projection, viewport).map(|screen| {
                PlacedLabel {
                    screen,
                    label: point.label.as_str(),
                    axis: point.axis,
                }
            })
        })
        .collect()
}
