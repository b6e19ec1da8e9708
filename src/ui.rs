//! Heads-up overlay: tick labels, the view readout and the coordinate range box.

use crate::renderer::camera::{Axis, CameraState, PlacedLabel, ViewClassifier, normalize_degrees};
use crate::settings::DisplaySettings;

const MARGIN: f32 = 20.0;
const PADDING: f32 = 10.0;
const BOX_WIDTH: f32 = 220.0;
const LINE_HEIGHT: f32 = 30.0;
const LABEL_OFFSET: f32 = 10.0;
const Y_LABEL_INDENT: f32 = 20.0;

/// Camera readout shown in the bottom-right box.
#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    pub view_name: String,
    /// Normalized to `[0, 360)`.
    pub angle_h: f32,
    pub angle_v: f32,
    pub distance: f32,
}

impl HudReadout {
    pub fn new(state: &CameraState, classifier: &ViewClassifier) -> Self {
        let (angle_h, angle_v) = state.get_orientation();
        Self {
            view_name: classifier.classify(angle_h, angle_v),
            angle_h: normalize_degrees(angle_h),
            angle_v,
            distance: state.radius(),
        }
    }

    pub fn lines(&self) -> [String; 4] {
        [
            format!("View: {}", self.view_name),
            format!("H-Angle: {:.1}°", self.angle_h),
            format!("V-Angle: {:.1}°", self.angle_v),
            format!("Distance: {:.2}", self.distance),
        ]
    }
}

pub fn coordinate_range_lines(display: &DisplaySettings) -> [String; 3] {
    let length = display.axis_length;
    [
        "Coordinate Range:".to_string(),
        format!("X, Z: -{length} to {length}"),
        format!("Y: 0 to {length}"),
    ]
}

/// Top-left corner of a tick label in egui points.
///
/// Projected positions are window pixels with y growing upward; egui wants
/// points with y growing downward.
pub fn label_anchor(
    label: &PlacedLabel<'_>,
    surface_height: f32,
    pixels_per_point: f32,
) -> egui::Pos2 {
    let x = label.screen.x;
    let y = surface_height - label.screen.y;
    let (x, y) = match label.axis {
        Axis::X | Axis::Z => (x, y + LABEL_OFFSET),
        Axis::Y => (x - Y_LABEL_INDENT, y),
    };
    egui::pos2(x / pixels_per_point, y / pixels_per_point)
}

/// Everything the overlay draws in one frame.
pub struct OverlayFrame<'a> {
    pub hud: &'a HudReadout,
    pub labels: &'a [PlacedLabel<'a>],
    /// Surface height in physical pixels.
    pub surface_height: f32,
    pub display: &'a DisplaySettings,
}

pub struct Ui {
    font_size: f32,
}

impl Ui {
    pub fn new() -> Self {
        Self { font_size: 20.0 }
    }

    pub fn show(&self, ctx: &egui::Context, frame: &OverlayFrame<'_>) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("viewport_overlay_painter"),
        ));
        let font_id = egui::FontId::proportional(self.font_size);
        let pixels_per_point = ctx.pixels_per_point();

        for label in frame.labels {
            painter.text(
                label_anchor(label, frame.surface_height, pixels_per_point),
                egui::Align2::LEFT_TOP,
                label.label,
                font_id.clone(),
                egui::Color32::WHITE,
            );
        }

        let screen_rect = ctx.viewport_rect();

        // Coordinate range, top-left
        let status_rect = egui::Rect::from_min_size(
            screen_rect.min + egui::vec2(MARGIN, MARGIN),
            egui::vec2(BOX_WIDTH, 90.0),
        );
        self.draw_box(&painter, status_rect, &coordinate_range_lines(frame.display), &font_id);

        // View readout, bottom-right
        let hud_size = egui::vec2(BOX_WIDTH, 120.0);
        let hud_rect = egui::Rect::from_min_size(
            screen_rect.max - hud_size - egui::vec2(MARGIN, MARGIN),
            hud_size,
        );
        self.draw_box(&painter, hud_rect, &frame.hud.lines(), &font_id);
    }

    fn draw_box(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        lines: &[String],
        font_id: &egui::FontId,
    ) {
        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(178));
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(178)),
            egui::StrokeKind::Inside,
        );
        for (i, line) in lines.iter().enumerate() {
            painter.text(
                rect.min + egui::vec2(PADDING, PADDING + i as f32 * LINE_HEIGHT),
                egui::Align2::LEFT_TOP,
                line,
                font_id.clone(),
                egui::Color32::WHITE,
            );
        }
    }
}
