//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in world units.

use glam::{Mat4, Vec2, Vec3};

use super::vertex::Vertex;

/// Gauge placement (bottom-left corner) and size, top-left of the view
pub const FUEL_GAUGE_ORIGIN: Vec2 = Vec2::new(-4.5, 3.5);
pub const FUEL_GAUGE_SIZE: Vec2 = Vec2::new(3.0, 0.3);

/// Push a local-space point through a model matrix
#[inline]
fn transformed(model: &Mat4, local: Vec2, color: [f32; 4]) -> Vertex {
    let p = model.transform_point3(local.extend(0.0));
    Vertex::new(p.x, p.y, color)
}

/// Axis-aligned rectangle centered on `center`
pub fn rect(center: Vec2, half_extents: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let model = Mat4::from_translation(center.extend(0.0));
    let (hw, hh) = (half_extents.x, half_extents.y);
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .into_iter()
    .map(|corner| transformed(&model, corner, color))
    .collect()
}

/// Rectangle anchored at its bottom-left corner
pub fn rect_from_corner(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;
    rect(origin + half, half, color)
}

/// Lander triangle (unit size, pointing up), translated then rotated about z
pub fn lander(position: Vec3, tilt_degrees: f32, color: [f32; 4]) -> Vec<Vertex> {
    let model = Mat4::from_translation(position) * Mat4::from_rotation_z(tilt_degrees.to_radians());
    [
        Vec2::new(0.0, 0.5),
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
    ]
    .into_iter()
    .map(|corner| transformed(&model, corner, color))
    .collect()
}

/// Background bar plus a bar scaled by the remaining fuel fraction
pub fn fuel_gauge(fraction: f32, background: [f32; 4], level: [f32; 4]) -> Vec<Vertex> {
    let fraction = fraction.clamp(0.0, 1.0);
    let mut vertices = rect_from_corner(FUEL_GAUGE_ORIGIN, FUEL_GAUGE_SIZE, background);
    if fraction > 0.0 {
        let size = Vec2::new(FUEL_GAUGE_SIZE.x * fraction, FUEL_GAUGE_SIZE.y);
        vertices.extend(rect_from_corner(FUEL_GAUGE_ORIGIN, size, level));
    }
    vertices
}
