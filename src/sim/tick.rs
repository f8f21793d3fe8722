//! Per-frame intent and the fixed sub-step
//!
//! [`apply_input`] runs once per displayed frame; [`step`] runs once per
//! fixed timestep drained from the accumulator.

use glam::Vec3;

use super::collision::{LandingLimits, resolve};
use super::state::GameState;

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Lateral thrust to the left (wins if both directions are held)
    pub left: bool,
    /// Lateral thrust to the right
    pub right: bool,
    /// Main engine
    pub thrust: bool,
    /// Start the attempt (no-op once started)
    pub start: bool,
    /// Restart after the attempt ended
    pub reset: bool,
}

/// Apply one frame of input to the game state.
///
/// Global controls are handled first. While the attempt is over nothing else
/// happens. Otherwise the player's acceleration is rebuilt from gravity alone
/// and each held engine adds its thrust, if there is fuel left.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
    }
    if input.start && !state.started {
        state.started = true;
        log::info!("Attempt started");
    }

    if state.attempt_over() {
        return;
    }

    let tuning = &state.tuning;
    let burn = tuning.fuel_per_burn();
    let mut acceleration = Vec3::new(0.0, tuning.gravity, 0.0);

    if state.started {
        if input.left {
            if !state.fuel.is_empty() {
                acceleration.x -= tuning.lateral_thrust;
                state.fuel.burn(burn);
                state.tilt_degrees = tuning.tilt_degrees;
            }
        } else if input.right {
            if !state.fuel.is_empty() {
                acceleration.x += tuning.lateral_thrust;
                state.fuel.burn(burn);
                state.tilt_degrees = -tuning.tilt_degrees;
            }
        } else {
            state.tilt_degrees = 0.0;
        }

        if input.thrust && !state.fuel.is_empty() {
            acceleration.y += tuning.vertical_thrust;
            state.fuel.burn(burn);
        }
    }

    state.world.player.acceleration = acceleration;
}

/// Advance the simulation by one fixed timestep.
///
/// Returns false without touching anything when the attempt is over or has
/// not been started.
pub fn step(state: &mut GameState, dt: f32) -> bool {
    if !state.physics_active() {
        return false;
    }

    state
        .world
        .player
        .integrate(dt, state.tuning.horizontal_damping);
    state.time_ticks += 1;

    let limits = LandingLimits {
        max_vx: state.tuning.safe_landing_vx,
        max_vy: state.tuning.safe_landing_vy,
    };
    if let Some(outcome) = resolve(&state.world, limits, &state.tuning.play_area) {
        state.finish(outcome);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::{CrashCause, Outcome};
    use crate::sim::state::GameStatus;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn held(left: bool, right: bool, thrust: bool) -> TickInput {
        TickInput {
            left,
            right,
            thrust,
            ..Default::default()
        }
    }

    #[test]
    fn test_gravity_only_without_input() {
        let mut state = GameState::new(12345, Tuning::default());
        apply_input(&mut state, &TickInput::default());
        assert_eq!(
            state.world.player.acceleration,
            Vec3::new(0.0, GRAVITY, 0.0)
        );
        assert_eq!(state.fuel.level(), MAX_FUEL);
    }

    #[test]
    fn test_thrust_adds_and_burns() {
        let mut state = GameState::new(12345, Tuning::default());
        let burn = FUEL_DRAIN_RATE * SIM_DT;

        apply_input(&mut state, &held(true, false, true));
        let acc = state.world.player.acceleration;
        assert!((acc.x + LATERAL_THRUST).abs() < 1e-6);
        assert!((acc.y - (GRAVITY + VERTICAL_THRUST)).abs() < 1e-6);
        assert!((state.fuel.level() - (MAX_FUEL - 2.0 * burn)).abs() < 1e-4);
        assert_eq!(state.tilt_degrees, TILT_DEGREES);

        apply_input(&mut state, &held(false, true, false));
        let acc = state.world.player.acceleration;
        assert!((acc.x - LATERAL_THRUST).abs() < 1e-6);
        assert_eq!(acc.y, GRAVITY);
        assert_eq!(state.tilt_degrees, -TILT_DEGREES);

        apply_input(&mut state, &held(false, false, true));
        assert_eq!(state.tilt_degrees, 0.0);
    }

    #[test]
    fn test_acceleration_is_not_cumulative() {
        let mut state = GameState::new(12345, Tuning::default());
        apply_input(&mut state, &held(false, true, true));
        apply_input(&mut state, &held(false, true, true));
        let acc = state.world.player.acceleration;
        assert!((acc.x - LATERAL_THRUST).abs() < 1e-6);
        assert!((acc.y - (GRAVITY + VERTICAL_THRUST)).abs() < 1e-6);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = GameState::new(12345, Tuning::default());
        apply_input(&mut state, &held(true, true, false));
        assert!(state.world.player.acceleration.x < 0.0);
        assert_eq!(state.tilt_degrees, TILT_DEGREES);
    }

    #[test]
    fn test_empty_tank_ignores_thrust() {
        let mut state = GameState::new(12345, Tuning::default());
        state.fuel.burn(MAX_FUEL);
        state.tilt_degrees = 0.0;

        apply_input(&mut state, &held(true, false, true));
        assert_eq!(
            state.world.player.acceleration,
            Vec3::new(0.0, GRAVITY, 0.0)
        );
        assert_eq!(state.fuel.level(), 0.0);
        // An ignored lateral key does not tilt the lander either
        assert_eq!(state.tilt_degrees, 0.0);
    }

    #[test]
    fn test_last_drop_floors_at_zero() {
        let mut state = GameState::new(12345, Tuning::default());
        state.fuel.burn(MAX_FUEL - 0.001);
        apply_input(&mut state, &held(false, true, true));
        // Lateral burn empties the tank, so the main engine stays cold
        assert_eq!(state.fuel.level(), 0.0);
        assert_eq!(state.world.player.acceleration.y, GRAVITY);
        assert!(state.world.player.acceleration.x > 0.0);
    }

    #[test]
    fn test_unstarted_ignores_thrust_and_physics() {
        let mut state = GameState::new_unstarted(12345, Tuning::default());
        apply_input(&mut state, &held(true, false, true));
        assert_eq!(state.fuel.level(), MAX_FUEL);
        let before = state.world.player.clone();
        assert!(!step(&mut state, SIM_DT));
        assert_eq!(state.world.player, before);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        apply_input(&mut state, &start);
        assert!(state.started);
        assert!(step(&mut state, SIM_DT));
        assert_ne!(state.world.player.position, before.position);
    }

    #[test]
    fn test_free_fall_until_crash() {
        let mut state = GameState::new(12345, Tuning::default());
        // Clear the corridor so only the ground matters
        state.world.obstacles.clear();
        let mut steps = 0;
        while state.is_running() {
            apply_input(&mut state, &TickInput::default());
            step(&mut state, SIM_DT);
            steps += 1;
            assert!(steps < 100_000, "lander never landed");
        }
        assert_eq!(state.status, GameStatus::Failed);
        // The spawn column comes down on the platform at x=0.25, not the pad
        assert_eq!(state.outcome, Some(Outcome::Crashed(CrashCause::Platform)));
        assert_eq!(state.time_ticks, steps as u64);
    }

    #[test]
    fn test_gentle_touchdown_on_pad() {
        let mut state = GameState::new(12345, Tuning::default());
        let pad = state.world.pad().unwrap().position;
        state.world.player.position = Vec3::new(pad.x, pad.y + 0.36, 0.0);
        state.world.player.velocity = Vec3::new(0.0, -0.3, 0.0);

        let mut steps = 0;
        while state.is_running() && steps < 1000 {
            apply_input(&mut state, &TickInput::default());
            step(&mut state, SIM_DT);
            steps += 1;
        }
        assert_eq!(state.status, GameStatus::Accomplished);
    }

    #[test]
    fn test_frozen_after_outcome() {
        let mut state = GameState::new(12345, Tuning::default());
        state.world.player.position = Vec3::new(0.0, -3.8, 0.0);
        assert!(step(&mut state, SIM_DT));
        assert_eq!(state.status, GameStatus::Failed);

        let frozen = state.world.player.clone();
        let ticks = state.time_ticks;
        for _ in 0..120 {
            apply_input(&mut state, &held(true, false, true));
            assert!(!step(&mut state, SIM_DT));
        }
        assert_eq!(state.world.player, frozen);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_reset_input_restores_attempt() {
        let mut state = GameState::new(12345, Tuning::default());
        let obstacles = state.world.obstacles.clone();
        apply_input(&mut state, &held(false, false, true));
        state.world.player.position = Vec3::new(0.0, -3.8, 0.0);
        step(&mut state, SIM_DT);
        assert_eq!(state.status, GameStatus::Failed);

        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        apply_input(&mut state, &reset);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.fuel.level(), MAX_FUEL);
        assert_eq!(state.world.player.position, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(state.world.player.velocity, Vec3::ZERO);
        assert_eq!(
            state.world.player.acceleration,
            Vec3::new(0.0, GRAVITY, 0.0)
        );
        assert_eq!(state.world.obstacles, obstacles);
    }

    #[test]
    fn test_reset_after_landing() {
        let mut state = GameState::new(12345, Tuning::default());
        let pad = state.world.pad().unwrap().position;
        apply_input(&mut state, &held(true, false, false));
        state.world.player.position = Vec3::new(pad.x, pad.y + 0.36, 0.0);
        state.world.player.velocity = Vec3::new(0.0, -0.3, 0.0);
        while state.is_running() {
            step(&mut state, SIM_DT);
        }
        assert_eq!(state.outcome, Some(Outcome::Landed));
        assert!(state.fuel.level() < MAX_FUEL);

        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        apply_input(&mut state, &reset);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.outcome, None);
        assert_eq!(state.fuel.level(), MAX_FUEL);
        assert_eq!(state.tilt_degrees, 0.0);
        assert_eq!(state.world.player.position, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(state.world.player.velocity, Vec3::ZERO);

        // The new attempt simulates again
        assert!(step(&mut state, SIM_DT));
        assert!(state.world.player.position.y < 3.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());

        let inputs = [
            held(false, true, false),
            held(false, false, true),
            held(true, false, true),
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(400) {
            apply_input(&mut state1, input);
            apply_input(&mut state2, input);
            step(&mut state1, SIM_DT);
            step(&mut state2, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.world, state2.world);
        assert_eq!(state1.fuel, state2.fuel);
        assert_eq!(state1.status, state2.status);
    }

    fn any_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), prop::bool::weighted(0.05)).prop_map(
            |(left, right, thrust, reset)| TickInput {
                left,
                right,
                thrust,
                reset,
                start: false,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_fuel_monotonic(
            start_fuel in 0.0f32..=MAX_FUEL,
            inputs in prop::collection::vec(any_input(), 1..300),
        ) {
            let mut state = GameState::new(5, Tuning::default());
            state.fuel.burn(MAX_FUEL - start_fuel);

            for input in &inputs {
                let before = state.fuel.level();
                let was_over = state.attempt_over();
                apply_input(&mut state, input);
                let after = state.fuel.level();

                prop_assert!(after >= 0.0);
                if input.reset && was_over {
                    // Refilled, then at most two engines burned this frame
                    let burn = FUEL_DRAIN_RATE * SIM_DT;
                    prop_assert!(after <= MAX_FUEL);
                    prop_assert!(after >= MAX_FUEL - 2.0 * burn - 1e-4);
                } else {
                    prop_assert!(after <= before);
                }
                step(&mut state, SIM_DT);
            }
        }

        #[test]
        fn prop_empty_tank_means_gravity_only(input in any_input()) {
            let mut state = GameState::new(5, Tuning::default());
            state.fuel.burn(MAX_FUEL);
            let input = TickInput { reset: false, ..input };
            apply_input(&mut state, &input);
            prop_assert_eq!(state.world.player.acceleration, Vec3::new(0.0, GRAVITY, 0.0));
            prop_assert_eq!(state.fuel.level(), 0.0);
        }
    }
}
