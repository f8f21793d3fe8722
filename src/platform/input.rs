//! Keyboard state and edge-triggered events
//!
//! A frame's input is the set of held direction keys plus whatever discrete
//! events were queued since the last poll.

use std::collections::VecDeque;

use crate::sim::{GameState, TickInput};

/// Held state of the four direction keys (arrows or WASD)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    /// Polled for completeness; the lander has no downward engine
    pub down: bool,
}

/// Edge-triggered events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or quit key
    Quit,
    /// Restart key
    Restart,
    /// Start key
    Start,
}

/// Everything polled for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub keys: KeyState,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }

    /// Map to simulation intent. Quit is handled by the frame loop.
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            left: self.keys.left,
            right: self.keys.right,
            thrust: self.keys.up,
            start: self.events.contains(&InputEvent::Start),
            reset: self.events.contains(&InputEvent::Restart),
        }
    }
}

/// Polled once per frame; must not block
pub trait InputSource {
    /// Drain pending events and report held keys. `state` is available to
    /// sources that steer by looking at the game, such as the autopilot.
    fn poll(&mut self, state: &GameState) -> FrameInput;
}

/// Replays a fixed list of frames, then reports no input
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }
}
