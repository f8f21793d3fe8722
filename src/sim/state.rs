//! Game state and world layout
//!
//! All mutable game data lives in [`GameState`]; nothing is global.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, Role};
use super::collision::Outcome;
use crate::consts::*;
use crate::tuning::Tuning;

/// Status of the current attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    Failed,
    Accomplished,
}

impl GameStatus {
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Landed => GameStatus::Accomplished,
            Outcome::Crashed(_) => GameStatus::Failed,
        }
    }

    /// End-of-attempt banner
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            GameStatus::Running => None,
            GameStatus::Failed => Some("MISSION FAILED"),
            GameStatus::Accomplished => Some("MISSION ACCOMPLISHED"),
        }
    }
}

/// Remaining fuel, clamped to `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    level: f32,
    max: f32,
}

impl Fuel {
    pub fn full(max: f32) -> Self {
        let max = max.max(0.0);
        Self { level: max, max }
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }

    /// Fraction remaining in `[0, 1]`, for gauges
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            (self.level / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Burn fuel. Negative amounts are ignored so the level never rises.
    pub fn burn(&mut self, amount: f32) {
        self.level -= amount.max(0.0);
        if self.level < 0.0 {
            self.level = 0.0;
        }
    }

    pub fn refill(&mut self) {
        self.level = self.max;
    }
}

/// The bodies in play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: Body,
    pub platforms: Vec<Body>,
    /// Index into `platforms` of the landing pad
    pub pad: usize,
    pub obstacles: Vec<Body>,
}

impl World {
    /// Build the reference layout: a row of platforms along the bottom with
    /// the pad at `tuning.pad_index`, and obstacles scattered from `rng`.
    pub fn generate(tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let platforms = (0..tuning.platform_count)
            .map(|i| {
                Body::new(
                    Role::Platform,
                    Vec2::new(tuning.platform_x(i), PLATFORM_Y),
                    PLATFORM_WIDTH,
                    PLATFORM_HEIGHT,
                )
            })
            .collect();

        let obstacles = (0..tuning.obstacle_count)
            .map(|_| {
                let x = rng.random_range(OBSTACLE_X_RANGE.0..OBSTACLE_X_RANGE.1);
                let y = rng.random_range(OBSTACLE_Y_RANGE.0..OBSTACLE_Y_RANGE.1);
                Body::new(Role::Obstacle, Vec2::new(x, y), OBSTACLE_SIZE, OBSTACLE_SIZE)
            })
            .collect();

        Self {
            player: spawn_player(tuning),
            platforms,
            pad: tuning.pad_index,
            obstacles,
        }
    }

    /// The landing pad, if the index is in range
    pub fn pad(&self) -> Option<&Body> {
        self.platforms.get(self.pad)
    }
}

/// A fresh lander at the spawn point, falling under gravity alone
pub fn spawn_player(tuning: &Tuning) -> Body {
    let mut player = Body::new(
        Role::Player,
        Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
        PLAYER_SIZE,
        PLAYER_SIZE,
    );
    player.acceleration = Vec3::new(0.0, tuning.gravity, 0.0);
    player
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the obstacle layout was generated from
    pub seed: u64,
    pub tuning: Tuning,
    pub status: GameStatus,
    /// Why the last attempt ended, if it has
    pub outcome: Option<Outcome>,
    pub fuel: Fuel,
    /// Physics only runs once the attempt has been started
    pub started: bool,
    /// Cosmetic lander rotation in degrees; not part of the hitbox
    pub tilt_degrees: f32,
    /// Simulation sub-steps executed with physics enabled
    pub time_ticks: u64,
    pub world: World,
}

impl GameState {
    /// Create a started game with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::generate(&tuning, &mut rng);
        log::info!(
            "World generated: seed {}, {} platforms, {} obstacles",
            seed,
            world.platforms.len(),
            world.obstacles.len()
        );
        Self {
            seed,
            fuel: Fuel::full(tuning.max_fuel),
            tuning,
            status: GameStatus::Running,
            outcome: None,
            started: true,
            tilt_degrees: 0.0,
            time_ticks: 0,
            world,
        }
    }

    /// Same as [`GameState::new`] but waiting for a start event
    pub fn new_unstarted(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self::new(seed, tuning);
        state.started = false;
        state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[inline]
    pub fn attempt_over(&self) -> bool {
        !self.is_running()
    }

    /// Whether a sub-step should move anything
    #[inline]
    pub fn physics_active(&self) -> bool {
        self.started && self.is_running()
    }

    /// End the attempt. Ignored if it is already over.
    pub fn finish(&mut self, outcome: Outcome) {
        if self.attempt_over() {
            return;
        }
        self.status = GameStatus::from_outcome(outcome);
        self.outcome = Some(outcome);
        let player = &self.world.player;
        match outcome {
            Outcome::Landed => log::info!(
                "Mission accomplished at ({:.2}, {:.2}), fuel {:.2}",
                player.position.x,
                player.position.y,
                self.fuel.level()
            ),
            Outcome::Crashed(cause) => log::info!(
                "Mission failed ({}) at ({:.2}, {:.2}) with velocity ({:.3}, {:.3})",
                cause.describe(),
                player.position.x,
                player.position.y,
                player.velocity.x,
                player.velocity.y
            ),
        }
    }

    /// Start a new attempt after the previous one ended.
    ///
    /// Returns false (and changes nothing) while an attempt is still running.
    /// Platforms and obstacles keep their layout.
    pub fn reset(&mut self) -> bool {
        if self.is_running() {
            log::debug!("Reset ignored: attempt still running");
            return false;
        }
        self.status = GameStatus::Running;
        self.outcome = None;
        self.fuel.refill();
        self.world.player = spawn_player(&self.tuning);
        self.tilt_degrees = 0.0;
        log::info!("Attempt reset");
        true
    }

    /// JSON snapshot for diagnostics
    pub fn snapshot(&self) -> Result<String, crate::LanderError> {
        Ok(serde_json::to_string(self)?)
    }
}
