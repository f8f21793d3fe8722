//! Collision detection and outcome classification
//!
//! Everything is axis-aligned: the lander's hitbox never rotates with its
//! cosmetic tilt.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::World;
use crate::consts::{PLAY_AREA_MAX_X, PLAY_AREA_MIN_X, PLAY_AREA_MIN_Y};

/// Region the lander must stay inside. Open at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            min_x: PLAY_AREA_MIN_X,
            max_x: PLAY_AREA_MAX_X,
            min_y: PLAY_AREA_MIN_Y,
        }
    }
}

impl PlayArea {
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite() && self.max_x.is_finite() && self.min_y.is_finite()
            && self.min_x < self.max_x
    }

    /// Points on the boundary are still inside
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y
    }
}

/// How an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Landed,
    Crashed(CrashCause),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Touched the pad too fast
    HardLanding,
    /// Touched a platform other than the pad
    Platform,
    Obstacle,
    OutOfBounds,
}

impl CrashCause {
    pub fn describe(&self) -> &'static str {
        match self {
            CrashCause::HardLanding => "landed too fast",
            CrashCause::Platform => "hit a platform",
            CrashCause::Obstacle => "hit an asteroid",
            CrashCause::OutOfBounds => "left the play area",
        }
    }
}

/// Speed limits for a safe touchdown (exclusive)
#[derive(Debug, Clone, Copy)]
pub struct LandingLimits {
    pub max_vx: f32,
    pub max_vy: f32,
}

impl LandingLimits {
    #[inline]
    pub fn is_safe(&self, velocity: Vec3) -> bool {
        velocity.y.abs() < self.max_vy && velocity.x.abs() < self.max_vx
    }
}

/// Inspect the player's post-step position and classify the attempt.
///
/// Returns `None` while the lander is still flying. When several triggers fire
/// in the same step any crash wins over a safe landing.
pub fn resolve(world: &World, limits: LandingLimits, area: &PlayArea) -> Option<Outcome> {
    let player = &world.player;
    let mut outcome = None;

    for (index, platform) in world.platforms.iter().enumerate() {
        if !player.overlaps(platform) {
            continue;
        }
        let hit = if index == world.pad {
            if limits.is_safe(player.velocity) {
                Outcome::Landed
            } else {
                Outcome::Crashed(CrashCause::HardLanding)
            }
        } else {
            Outcome::Crashed(CrashCause::Platform)
        };
        outcome = merge(outcome, hit);
    }

    if world.obstacles.iter().any(|o| player.overlaps(o)) {
        outcome = merge(outcome, Outcome::Crashed(CrashCause::Obstacle));
    }

    if !area.contains(player.position) {
        outcome = merge(outcome, Outcome::Crashed(CrashCause::OutOfBounds));
    }

    outcome
}

/// First crash is kept; a crash replaces an earlier landing
fn merge(current: Option<Outcome>, next: Outcome) -> Option<Outcome> {
    match (current, next) {
        (Some(Outcome::Crashed(cause)), _) => Some(Outcome::Crashed(cause)),
        _ => Some(next),
    }
}
