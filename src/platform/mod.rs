//! Platform abstraction layer
//!
//! The simulation never talks to the OS directly. It sees:
//! - a [`Clock`] for frame timing
//! - an [`InputSource`] that is polled once per frame

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{FrameInput, InputEvent, InputSource, KeyState, ScriptedInput};
