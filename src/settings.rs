//! Runtime settings
//!
//! Display and session options, kept apart from the physics [`crate::Tuning`].
//! Nothing is persisted; the binary reads overrides from the environment.

use serde::{Deserialize, Serialize};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::LanderError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub window_width: u32,
    pub window_height: u32,
    /// Target time between frames
    pub frame_interval_ms: u64,

    // === Session ===
    /// Obstacle layout seed; wall-clock derived when unset
    pub seed: Option<u64>,
    /// Stop after this many frames (headless runs)
    pub frame_limit: Option<u64>,
    /// Begin the attempt without waiting for a start event
    pub auto_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            frame_interval_ms: 16,
            seed: None,
            frame_limit: None,
            auto_start: true,
        }
    }
}

impl Settings {
    /// Environment variable overriding the seed
    pub const SEED_VAR: &'static str = "LANDER_SEED";
    /// Environment variable overriding the frame limit
    pub const FRAME_LIMIT_VAR: &'static str = "LANDER_FRAME_LIMIT";
    /// Environment variable overriding `auto_start` (`true`/`false`, `1`/`0`)
    pub const AUTO_START_VAR: &'static str = "LANDER_AUTO_START";

    /// Defaults plus environment overrides
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults plus overrides from `lookup`. Malformed values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(Self::SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => settings.seed = Some(seed),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", Self::SEED_VAR, raw, e),
            }
        }

        if let Some(raw) = lookup(Self::FRAME_LIMIT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(limit) => settings.frame_limit = Some(limit),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", Self::FRAME_LIMIT_VAR, raw, e),
            }
        }

        if let Some(raw) = lookup(Self::AUTO_START_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => settings.auto_start = true,
                "0" | "false" | "no" => settings.auto_start = false,
                _ => log::warn!("Ignoring {}={:?}", Self::AUTO_START_VAR, raw),
            }
        }

        settings
    }

    pub fn validate(&self) -> Result<(), LanderError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(LanderError::InvalidSettings(format!(
                "window size {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}
