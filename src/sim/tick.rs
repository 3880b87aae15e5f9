//! Fixed timestep simulation tick
//!
//! One tick runs the pipeline in order: latest tilt → integrate → resolve
//! boundaries → score. The tick is the sole mutator of ball and score state.

use crate::config::PhysicsConfig;

use super::boundary::{GoalEvent, resolve_boundaries};
use super::integrate::integrate;
use super::state::{BallState, SimState, TiltSample};

/// Advance the session by one fixed timestep.
///
/// On a goal crossing the owner's counter increments by exactly one and the
/// ball resets to the field center with zero velocity; otherwise the resolved
/// ball state carries into the next tick. Returns the goal event, if any.
pub fn tick(state: &mut SimState, tilt: TiltSample, cfg: &PhysicsConfig) -> Option<GoalEvent> {
    state.ball = integrate(state.ball, tilt, cfg);
    let event = resolve_boundaries(&mut state.ball, &state.geometry, cfg.ball_radius);

    if let Some(goal) = event {
        state.scores.record(goal.owner);
        state.ball = BallState::at_rest(state.geometry.center());
        log::info!(
            "Goal for owner {} on {:?} edge (now {})",
            goal.owner,
            goal.edge,
            state.scores.get(goal.owner)
        );
    }

    state.time_ticks += 1;
    event
}
