//! Data-driven game balance
//!
//! Every physics and rule constant the simulation reads lives in [`Tuning`].
//! The defaults are the reference constants from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LanderError;
use crate::sim::collision::PlayArea;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub lateral_thrust: f32,
    pub vertical_thrust: f32,
    /// Applied to horizontal velocity only, once per tick
    pub horizontal_damping: f32,
    pub max_fuel: f32,
    pub fuel_drain_rate: f32,
    /// Seconds per simulation sub-step
    pub fixed_timestep: f32,
    pub tilt_degrees: f32,
    pub safe_landing_vx: f32,
    pub safe_landing_vy: f32,
    pub play_area: PlayArea,
    pub platform_count: usize,
    /// Index of the landing pad within the platform row
    pub pad_index: usize,
    pub obstacle_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            lateral_thrust: LATERAL_THRUST,
            vertical_thrust: VERTICAL_THRUST,
            horizontal_damping: HORIZONTAL_DAMPING,
            max_fuel: MAX_FUEL,
            fuel_drain_rate: FUEL_DRAIN_RATE,
            fixed_timestep: SIM_DT,
            tilt_degrees: TILT_DEGREES,
            safe_landing_vx: SAFE_LANDING_VX,
            safe_landing_vy: SAFE_LANDING_VY,
            play_area: PlayArea::default(),
            platform_count: PLATFORM_COUNT,
            pad_index: 0,
            obstacle_count: OBSTACLE_COUNT,
        }
    }
}

impl Tuning {
    /// Fuel burned by one engine in one frame of held input
    #[inline]
    pub fn fuel_per_burn(&self) -> f32 {
        self.fuel_drain_rate * self.fixed_timestep
    }

    /// Centre x of platform `index` in the bottom row
    #[inline]
    pub fn platform_x(&self, index: usize) -> f32 {
        PLATFORM_FIRST_X + index as f32 * PLATFORM_SPACING
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), LanderError> {
        let finite = [
            ("gravity", self.gravity),
            ("lateral_thrust", self.lateral_thrust),
            ("vertical_thrust", self.vertical_thrust),
            ("horizontal_damping", self.horizontal_damping),
            ("max_fuel", self.max_fuel),
            ("fuel_drain_rate", self.fuel_drain_rate),
            ("fixed_timestep", self.fixed_timestep),
            ("tilt_degrees", self.tilt_degrees),
            ("safe_landing_vx", self.safe_landing_vx),
            ("safe_landing_vy", self.safe_landing_vy),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LanderError::InvalidTuning(format!("{name} is not finite")));
        }

        if self.fixed_timestep <= 0.0 {
            return Err(LanderError::InvalidTuning(
                "fixed_timestep must be positive".into(),
            ));
        }
        if self.max_fuel < 0.0 || self.fuel_drain_rate < 0.0 {
            return Err(LanderError::InvalidTuning(
                "fuel values must not be negative".into(),
            ));
        }
        if self.horizontal_damping <= 0.0 || self.horizontal_damping > 1.0 {
            return Err(LanderError::InvalidTuning(format!(
                "horizontal_damping {} outside (0, 1]",
                self.horizontal_damping
            )));
        }
        if self.safe_landing_vx <= 0.0 || self.safe_landing_vy <= 0.0 {
            return Err(LanderError::InvalidTuning(
                "safe landing thresholds must be positive".into(),
            ));
        }
        if self.pad_index >= self.platform_count {
            return Err(LanderError::InvalidTuning(format!(
                "pad_index {} but only {} platforms",
                self.pad_index, self.platform_count
            )));
        }
        if !self.play_area.is_valid() {
            return Err(LanderError::InvalidTuning(format!(
                "empty play area {:?}",
                self.play_area
            )));
        }

        let half = PLATFORM_WIDTH * 0.5;
        let left = self.platform_x(0) - half;
        let right = self.platform_x(self.platform_count - 1) + half;
        if left < self.play_area.min_x || right > self.play_area.max_x {
            return Err(LanderError::InvalidTuning(format!(
                "{} platforms span [{left}, {right}], outside the play area",
                self.platform_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.gravity, -0.05);
        assert_eq!(tuning.platform_count, 10);
        assert_eq!(tuning.obstacle_count, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            Tuning {
                fixed_timestep: 0.0,
                ..Default::default()
            },
            Tuning {
                horizontal_damping: 1.5,
                ..Default::default()
            },
            Tuning {
                max_fuel: -1.0,
                ..Default::default()
            },
            Tuning {
                gravity: f32::NAN,
                ..Default::default()
            },
            Tuning {
                pad_index: 10,
                ..Default::default()
            },
            Tuning {
                platform_count: 0,
                ..Default::default()
            },
        ];
        for tuning in &bad {
            assert!(
                matches!(tuning.validate(), Err(LanderError::InvalidTuning(_))),
                "{tuning:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_platform_row_must_fit() {
        let crowded = Tuning {
            platform_count: 20,
            ..Default::default()
        };
        assert!(matches!(
            crowded.validate(),
            Err(LanderError::InvalidTuning(_))
        ));

        let narrow = Tuning {
            play_area: PlayArea {
                max_x: 3.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(narrow.validate().is_err());

        // Row edges land exactly on the boundary at -5.0
        let fewer = Tuning {
            platform_count: 3,
            ..Default::default()
        };
        assert!(fewer.validate().is_ok());
        assert_eq!(fewer.platform_x(2), -2.75);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": -0.1 }"#).unwrap();
        assert_eq!(tuning.gravity, -0.1);
        assert_eq!(tuning.max_fuel, MAX_FUEL);
        assert_eq!(tuning.play_area, PlayArea::default());
    }
}
