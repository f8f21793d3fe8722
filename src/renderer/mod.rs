//! Rendering boundary
//!
//! The core never draws. Each frame it captures a backend-agnostic [`Scene`]
//! (coloured triangles in world units plus HUD data) and hands it to a
//! [`Renderer`]. GPU, window and font handling live behind that trait.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::LanderError;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::{GameState, GameStatus};

/// Where the end-of-attempt banner is anchored (left edge, baseline)
pub fn banner_anchor(status: GameStatus) -> Vec2 {
    match status {
        GameStatus::Accomplished => Vec2::new(-4.0, 0.0),
        _ => Vec2::new(-3.0, 0.0),
    }
}

/// End-of-attempt text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Banner {
    pub text: &'static str,
    /// Left edge, baseline
    pub anchor: Vec2,
    pub color: [f32; 4],
}

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear_color: [f32; 4],
    /// Triangle list: platforms, asteroids, lander, fuel gauge
    pub vertices: Vec<Vertex>,
    pub fuel_fraction: f32,
    pub status: GameStatus,
    /// Shown once the attempt is over
    pub banner: Option<Banner>,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let world = &state.world;
        let mut vertices = Vec::new();

        for (index, platform) in world.platforms.iter().enumerate() {
            let color = if index == world.pad {
                colors::LANDING_PAD
            } else {
                colors::HAZARD_PLATFORM
            };
            vertices.extend(shapes::rect(
                platform.position.truncate(),
                platform.half_extents(),
                color,
            ));
        }

        for obstacle in &world.obstacles {
            vertices.extend(shapes::rect(
                obstacle.position.truncate(),
                obstacle.half_extents(),
                colors::ASTEROID,
            ));
        }

        vertices.extend(shapes::lander(
            world.player.position,
            state.tilt_degrees,
            colors::LANDER,
        ));

        let fuel_fraction = state.fuel.fraction();
        vertices.extend(shapes::fuel_gauge(
            fuel_fraction,
            colors::FUEL_BACKGROUND,
            colors::FUEL_LEVEL,
        ));

        Self {
            clear_color: colors::BACKGROUND,
            vertices,
            fuel_fraction,
            status: state.status,
            banner: state.status.banner().map(|text| Banner {
                text,
                anchor: banner_anchor(state.status),
                color: colors::BANNER,
            }),
        }
    }
}

/// A drawing backend
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> Result<(), LanderError>;
}

/// Headless renderer: reports status changes through the log
#[derive(Debug)]
pub struct LogRenderer {
    /// Target surface size in pixels
    viewport: (u32, u32),
    frames: u64,
    last_status: Option<GameStatus>,
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::with_viewport(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            frames: 0,
            last_status: None,
        }
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, scene: &Scene) -> Result<(), LanderError> {
        self.frames += 1;
        if self.frames == 1 {
            log::info!(
                "Rendering headless at {}x{}",
                self.viewport.0,
                self.viewport.1
            );
        }

        if self.last_status != Some(scene.status) {
            match scene.banner {
                Some(banner) => log::info!("{} (frame {})", banner.text, self.frames),
                None => log::info!("Attempt running (frame {})", self.frames),
            }
            self.last_status = Some(scene.status);
        }

        if self.frames % 60 == 0 {
            log::debug!(
                "frame {}: {} vertices, fuel {:.1}%",
                self.frames,
                scene.vertices.len(),
                scene.fuel_fraction * 100.0
            );
        }
        Ok(())
    }
}
