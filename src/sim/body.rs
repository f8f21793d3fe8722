//! Rectangular bodies and their kinematics

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// What a body is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Platform,
    Obstacle,
}

/// An axis-aligned rectangle with kinematic state
///
/// Position, velocity and acceleration are 3D so they compose directly with
/// render transforms; z stays 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    half_width: f32,
    half_height: f32,
    pub role: Role,
}

impl Body {
    /// Create a body at rest. Negative sizes collapse to zero extent.
    pub fn new(role: Role, position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position: position.extend(0.0),
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            half_width: width.max(0.0) / 2.0,
            half_height: height.max(0.0) / 2.0,
            role,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }

    /// Advance one step with semi-implicit Euler.
    ///
    /// Velocity is updated first and damped on x only; position then moves by
    /// the new velocity. Nothing is clamped here.
    pub fn integrate(&mut self, dt: f32, damping_x: f32) {
        self.velocity += self.acceleration * dt;
        self.velocity.x *= damping_x;
        self.position += self.velocity * dt;
    }

    /// Strict AABB overlap; touching edges do not count
    pub fn overlaps(&self, other: &Body) -> bool {
        let diff = (self.position - other.position).truncate().abs();
        let combined = self.half_extents() + other.half_extents();
        diff.x < combined.x && diff.y < combined.y
    }
}
