//! Frame loop
//!
//! One frame: poll input, apply intent, drain the fixed-timestep accumulator,
//! render. Single-threaded; the game owns all mutable state.

use crate::error::LanderError;
use crate::platform::{Clock, FrameInput, InputSource};
use crate::renderer::{Renderer, Scene};
use crate::sim::{FixedTimestep, GameState, apply_input, step};

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    timestep: FixedTimestep,
    /// Sub-steps run by the most recent frame
    last_substeps: u32,
}

impl Game {
    /// `start` is the clock reading the first frame is measured from
    pub fn new(state: GameState, start: f64) -> Self {
        let timestep = FixedTimestep::new(state.tuning.fixed_timestep, start);
        Self {
            state,
            timestep,
            last_substeps: 0,
        }
    }

    pub fn last_substeps(&self) -> u32 {
        self.last_substeps
    }

    /// Process one frame of input at clock time `now`
    pub fn frame(&mut self, now: f64, input: &FrameInput) -> Result<Control, LanderError> {
        if input.quit_requested() {
            log::info!("Quit requested");
            return Ok(Control::Quit);
        }

        let was_running = self.state.is_running();
        apply_input(&mut self.state, &input.to_tick_input());

        let dt = self.state.tuning.fixed_timestep;
        let state = &mut self.state;
        self.last_substeps = self.timestep.advance(now, || {
            // Frozen worlds still consume time
            step(state, dt);
        });

        if was_running && self.state.attempt_over() {
            log::debug!("Final state: {}", self.state.snapshot()?);
        }

        Ok(Control::Continue)
    }

    /// Poll, simulate and render one frame
    pub fn run_frame(
        &mut self,
        clock: &impl Clock,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> Result<Control, LanderError> {
        let frame_input = input.poll(&self.state);
        let control = self.frame(clock.now(), &frame_input)?;
        if control == Control::Continue {
            renderer.render(&Scene::capture(&self.state))?;
        }
        Ok(control)
    }

    /// Run frames until quit or `frame_limit`, calling `between_frames` after
    /// each rendered frame. Returns the number of frames run.
    pub fn run(
        &mut self,
        clock: &impl Clock,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
        frame_limit: Option<u64>,
        mut between_frames: impl FnMut(),
    ) -> Result<u64, LanderError> {
        let mut frames = 0;
        loop {
            if frame_limit.is_some_and(|limit| frames >= limit) {
                log::info!("Frame limit {} reached", frames);
                break;
            }
            frames += 1;
            if self.run_frame(clock, input, renderer)? == Control::Quit {
                break;
            }
            between_frames();
        }
        Ok(frames)
    }
}
