//! Real-time accumulator for fixed-rate simulation
//!
//! Decouples the simulation rate from the display rate: every frame feeds the
//! wall-clock time in and gets back how many whole sub-steps to run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedTimestep {
    /// Seconds per sub-step
    dt: f64,
    /// Clock reading at the previous frame
    previous_ticks: f64,
    /// Unsimulated time carried over between frames
    accumulator: f64,
}

impl FixedTimestep {
    /// `start` is the clock reading the first frame is measured from
    pub fn new(dt: f32, start: f64) -> Self {
        Self {
            dt: f64::from(dt),
            previous_ticks: start,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Drain whole timesteps up to `now`, calling `sub_step` once for each.
    ///
    /// Returns the number of sub-steps run. There is no cap: a long stall is
    /// caught up in full on the next frame.
    pub fn advance(&mut self, now: f64, mut sub_step: impl FnMut()) -> u32 {
        let mut elapsed = now - self.previous_ticks;
        self.previous_ticks = now;
        elapsed += self.accumulator;

        let mut substeps = 0;
        while elapsed >= self.dt {
            sub_step();
            elapsed -= self.dt;
            substeps += 1;
        }

        self.accumulator = elapsed;
        substeps
    }
}
