//! Ground grid, axes and tick geometry. Pure vertex generation; the renderer
//! uploads the results as line and point lists.

use crate::renderer::camera::{AnnotationPoint, Axis};
use crate::renderer::line_vertex::LineVertex;
use crate::settings::DisplaySettings;
use nalgebra_glm as glm;

const X_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const Y_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const Z_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const TICK_SIZE: f32 = 0.5;
const MARKER_SIZE: f32 = 2.0;
const GRID_POINT_SPACING: usize = 5;

/// Grid lines on the XZ plane. The center lines are left to the axes.
pub fn grid_lines(settings: &DisplaySettings) -> Vec<LineVertex> {
    let size = settings.grid_size.max(1);
    let extent = size as f32;
    let major = settings.major_grid_spacing.max(1);
    let mut vertices = Vec::new();

    for i in (-size..=size).step_by(settings.grid_spacing.max(1) as usize) {
        if i == 0 {
            continue;
        }
        let is_major = i % major == 0;
        let fade = (1.0 - (i.abs() as f32 / extent) * 0.8).max(0.2);
        let color = if is_major {
            [0.6, 0.6, 0.6, fade]
        } else {
            [0.3, 0.3, 0.3, fade * 0.8]
        };
        let pos = i as f32;
        vertices.push(LineVertex::new([-extent, 0.0, pos], color));
        vertices.push(LineVertex::new([extent, 0.0, pos], color));
        vertices.push(LineVertex::new([pos, 0.0, -extent], color));
        vertices.push(LineVertex::new([pos, 0.0, extent], color));
    }
    vertices
}

/// Dots every five units across the grid, fading with distance from the origin.
pub fn grid_points(settings: &DisplaySettings) -> Vec<LineVertex> {
    let size = settings.grid_size.max(1);
    let max_distance = size as f32 * 1.414;
    let mut vertices = Vec::new();

    for x in (-size..=size).step_by(GRID_POINT_SPACING) {
        for z in (-size..=size).step_by(GRID_POINT_SPACING) {
            if x == 0 && z == 0 {
                continue;
            }
            let (xf, zf) = (x as f32, z as f32);
            let distance = (xf * xf + zf * zf).sqrt();
            let fade = (1.0 - (distance / max_distance) * 0.7).max(0.3);
            vertices.push(LineVertex::new([xf, 0.0, zf], [0.7, 0.7, 0.7, fade]));
        }
    }
    vertices
}

/// Axis lines, tick marks and end markers. Y only extends upward.
pub fn axis_lines(settings: &DisplaySettings) -> Vec<LineVertex> {
    let length = settings.axis_length.max(1);
    let extent = length as f32;
    let spacing = settings.tick_spacing.max(1) as usize;
    let mut vertices = vec![
        LineVertex::new([-extent, 0.0, 0.0], X_COLOR),
        LineVertex::new([extent, 0.0, 0.0], X_COLOR),
        LineVertex::new([0.0, 0.0, 0.0], Y_COLOR),
        LineVertex::new([0.0, extent, 0.0], Y_COLOR),
        LineVertex::new([0.0, 0.0, -extent], Z_COLOR),
        LineVertex::new([0.0, 0.0, extent], Z_COLOR),
    ];

    for i in (-length..=length).step_by(spacing) {
        let pos = i as f32;
        vertices.push(LineVertex::new([pos, 0.0, 0.0], X_COLOR));
        vertices.push(LineVertex::new([pos, TICK_SIZE, 0.0], X_COLOR));
        vertices.push(LineVertex::new([0.0, 0.0, pos], Z_COLOR));
        vertices.push(LineVertex::new([0.0, TICK_SIZE, pos], Z_COLOR));
    }
    for i in (0..=length).step_by(spacing) {
        let pos = i as f32;
        vertices.push(LineVertex::new([0.0, pos, 0.0], Y_COLOR));
        vertices.push(LineVertex::new([TICK_SIZE, pos, 0.0], Y_COLOR));
    }

    wire_cube(&mut vertices, [extent, 0.0, 0.0], MARKER_SIZE, X_COLOR);
    wire_cube(&mut vertices, [0.0, extent, 0.0], MARKER_SIZE, Y_COLOR);
    wire_cube(&mut vertices, [0.0, 0.0, extent], MARKER_SIZE, Z_COLOR);
    vertices
}

fn wire_cube(vertices: &mut Vec<LineVertex>, center: [f32; 3], size: f32, color: [f32; 4]) {
    let h = size * 0.5;
    let corner = |i: usize| {
        [
            center[0] + if i & 1 == 0 { -h } else { h },
            center[1] + if i & 2 == 0 { -h } else { h },
            center[2] + if i & 4 == 0 { -h } else { h },
        ]
    };
    // Corners differing in exactly one bit share an edge.
    for a in 0..8 {
        for bit in [1, 2, 4] {
            let b = a | bit;
            if b != a {
                vertices.push(LineVertex::new(corner(a), color));
                vertices.push(LineVertex::new(corner(b), color));
            }
        }
    }
}

/// Numeric labels at every tick: X and Z across the full axis, Y from zero up.
pub fn axis_tick_annotations(settings: &DisplaySettings) -> Vec<AnnotationPoint> {
    let length = settings.axis_length.max(1);
    let spacing = settings.tick_spacing.max(1) as usize;
    let label = |axis: Axis, i: i32| {
        let pos = i as f32;
        let world_position = match axis {
            Axis::X => glm::vec3(pos, 0.0, 0.0),
            Axis::Y => glm::vec3(0.0, pos, 0.0),
            Axis::Z => glm::vec3(0.0, 0.0, pos),
        };
        AnnotationPoint {
            world_position,
            label: i.to_string(),
            axis,
        }
    };

    let mut points: Vec<AnnotationPoint> = (-length..=length)
        .step_by(spacing)
        .map(|i| label(Axis::X, i))
        .collect();
    points.extend((0..=length).step_by(spacing).map(|i| label(Axis::Y, i)));
    points.extend((-length..=length).step_by(spacing).map(|i| label(Axis::Z, i)));
    points
}
