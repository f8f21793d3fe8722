//! Lunar Lander entry point
//!
//! Headless native runner: the demo pilot flies one attempt and the outcome is
//! reported through the log. Set `RUST_LOG=debug` for per-second detail.

use std::time::Duration;

use lunar_lander::autopilot::Autopilot;
use lunar_lander::platform::{Clock, SystemClock};
use lunar_lander::renderer::LogRenderer;
use lunar_lander::sim::GameState;
use lunar_lander::{Game, LanderError, Settings, Tuning};

fn run() -> Result<(), LanderError> {
    let settings = Settings::load();
    settings.validate()?;
    let tuning = Tuning::default();
    tuning.validate()?;

    let seed = settings.resolve_seed();
    log::info!("Lunar Lander starting (seed {})", seed);
    log::debug!("Tuning: {}", serde_json::to_string(&tuning)?);

    let state = if settings.auto_start {
        GameState::new(seed, tuning)
    } else {
        GameState::new_unstarted(seed, tuning)
    };

    let clock = SystemClock::new();
    let mut game = Game::new(state, clock.now());
    let mut pilot = Autopilot::new();
    let mut renderer =
        LogRenderer::with_viewport(settings.window_width, settings.window_height);

    let interval = Duration::from_millis(settings.frame_interval_ms);
    let frames = game.run(
        &clock,
        &mut pilot,
        &mut renderer,
        settings.frame_limit,
        || std::thread::sleep(interval),
    )?;

    match game.state.outcome {
        Some(outcome) => log::info!("Finished after {} frames: {:?}", frames, outcome),
        None => log::info!("Stopped after {} frames with the attempt still running", frames),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
