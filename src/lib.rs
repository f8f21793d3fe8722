//! Lunar Lander - a fixed-timestep 2D arcade lander
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `game`: Frame loop wiring the simulation to its collaborators
//! - `platform`: Clock and input abstraction
//! - `renderer`: Backend-agnostic scene building
//! - `tuning`: Data-driven physics and rule constants

pub mod autopilot;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::LanderError;
pub use game::{Control, Game};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 480;

    /// Orthographic view volume in world units
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = -0.05;
    /// Horizontal acceleration while a lateral key is held
    pub const LATERAL_THRUST: f32 = 0.90;
    /// Vertical acceleration while the thrust key is held
    pub const VERTICAL_THRUST: f32 = 0.95;
    /// Multiplier applied to horizontal velocity every tick
    pub const HORIZONTAL_DAMPING: f32 = 0.995;

    /// Fuel budget
    pub const MAX_FUEL: f32 = 100.0;
    /// Fuel burned per second of held thrust, per engine
    pub const FUEL_DRAIN_RATE: f32 = 0.25;

    /// Cosmetic lander tilt while thrusting sideways (degrees)
    pub const TILT_DEGREES: f32 = 15.0;

    /// Landing is safe only below these speeds
    pub const SAFE_LANDING_VX: f32 = 0.3;
    pub const SAFE_LANDING_VY: f32 = 0.5;

    /// Play area, leaving it fails the attempt
    pub const PLAY_AREA_MIN_X: f32 = -5.0;
    pub const PLAY_AREA_MAX_X: f32 = 5.0;
    pub const PLAY_AREA_MIN_Y: f32 = -3.75;

    /// Lander spawn and hitbox
    pub const PLAYER_SPAWN: (f32, f32) = (0.0, 3.0);
    pub const PLAYER_SIZE: f32 = 0.5;

    /// Platform row along the bottom edge; the first one is the landing pad
    pub const PLATFORM_COUNT: usize = 10;
    pub const PLATFORM_FIRST_X: f32 = -4.75;
    pub const PLATFORM_SPACING: f32 = 1.0;
    pub const PLATFORM_Y: f32 = -3.5;
    pub const PLATFORM_WIDTH: f32 = 0.5;
    pub const PLATFORM_HEIGHT: f32 = 0.2;

    /// Obstacles scattered through the descent corridor
    pub const OBSTACLE_COUNT: usize = 3;
    pub const OBSTACLE_SIZE: f32 = 0.3;
    pub const OBSTACLE_X_RANGE: (f32, f32) = (-4.0, 4.0);
    pub const OBSTACLE_Y_RANGE: (f32, f32) = (-1.0, 2.0);
}
