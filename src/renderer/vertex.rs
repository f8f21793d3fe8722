//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, ready for a GPU vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const LANDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LANDING_PAD: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const HAZARD_PLATFORM: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ASTEROID: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const FUEL_BACKGROUND: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
    pub const FUEL_LEVEL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BANNER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Deep space blue
    pub const BACKGROUND: [f32; 4] = [0.0, 0.1, 0.2, 1.0];
}
