//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms in layout order, pad by index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;
pub mod timestep;

pub use body::{Body, Role};
pub use collision::{CrashCause, LandingLimits, Outcome, PlayArea, resolve};
pub use state::{Fuel, GameState, GameStatus, World, spawn_player};
pub use tick::{TickInput, apply_input, step};
pub use timestep::FixedTimestep;
