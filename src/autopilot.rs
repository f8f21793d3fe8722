//! Demo pilot
//!
//! Flies the lander like a cautious player: climb to a cruise altitude above
//! the asteroid belt, drift over the pad, then descend slowly. Used by the
//! headless binary in place of a keyboard.

use crate::platform::{FrameInput, InputEvent, InputSource, KeyState};
use crate::sim::GameState;

/// Horizontal speed cap while crossing to the pad
const MAX_CRUISE_VX: f32 = 0.25;
/// Proportional gain from horizontal offset to desired speed
const APPROACH_GAIN: f32 = 0.5;
/// Dead band around the desired horizontal speed
const VX_TOLERANCE: f32 = 0.02;
/// Offset and speed below which the lander counts as lined up
const ALIGN_DX: f32 = 0.1;
const ALIGN_VX: f32 = 0.1;
/// Climb rate while below cruise altitude
const CLIMB_VY: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Height to hold until lined up with the pad
    pub cruise_altitude: f32,
    /// Sink rate during final descent; must stay under the safe landing limit
    pub descent_speed: f32,
    /// Frames to keep showing the outcome before quitting
    pub linger_frames: u32,
    lingered: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            cruise_altitude: 2.8,
            descent_speed: 0.25,
            linger_frames: 120,
            lingered: 0,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys to hold this frame
    pub fn steer(&self, state: &GameState) -> KeyState {
        let Some(pad) = state.world.pad() else {
            return KeyState::default();
        };
        let player = &state.world.player;
        let dx = pad.position.x - player.position.x;
        let vx = player.velocity.x;
        let vy = player.velocity.y;

        let mut keys = KeyState::default();

        let desired_vx = (dx * APPROACH_GAIN).clamp(-MAX_CRUISE_VX, MAX_CRUISE_VX);
        if vx < desired_vx - VX_TOLERANCE {
            keys.right = true;
        } else if vx > desired_vx + VX_TOLERANCE {
            keys.left = true;
        }

        let aligned = dx.abs() < ALIGN_DX && vx.abs() < ALIGN_VX;
        let desired_vy = if aligned {
            -self.descent_speed
        } else if player.position.y < self.cruise_altitude {
            CLIMB_VY
        } else {
            0.0
        };
        keys.up = vy < desired_vy;

        keys
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> FrameInput {
        if state.attempt_over() {
            self.lingered += 1;
            if self.lingered >= self.linger_frames {
                return FrameInput {
                    events: vec![InputEvent::Quit],
                    ..Default::default()
                };
            }
            return FrameInput::default();
        }

        self.lingered = 0;
        let events = if state.started {
            Vec::new()
        } else {
            vec![InputEvent::Start]
        };
        FrameInput {
            keys: self.steer(state),
            events,
        }
    }
}
