//! Boundary and goal resolution for the rectangular field
//!
//! Walls reflect elastically; a goal mouth on the top or bottom edge lets the
//! ball through and reports the crossing instead. The two axes resolve
//! independently, so a lateral bounce can land in the same tick as a goal.

use super::field::{Edge, FieldGeometry, OwnerId};
use super::state::BallState;

/// Emitted when the ball crosses a goal mouth
///
/// The resolver neither clamps nor reflects on a goal; the ball reset is
/// deferred to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEvent {
    pub owner: OwnerId,
    pub edge: Edge,
}

/// Clamp the ball to the margin-inset field and reflect velocity on wall
/// contact; report a goal when a vertical crossing lands inside a goal mouth.
///
/// Top is evaluated before bottom and at most one goal event is emitted per
/// tick; a simultaneous crossing of the other vertical edge falls back to a
/// wall bounce. Re-resolving an already-resolved state is a no-op.
///
/// Unmeasured geometry (zero width or height) suppresses every check.
pub fn resolve_boundaries(
    ball: &mut BallState,
    geometry: &FieldGeometry,
    ball_radius: f32,
) -> Option<GoalEvent> {
    if !geometry.is_measured() {
        return None;
    }

    // The leading edge of the ball crosses the margin when its center crosses
    // the radius-inset bound.
    let lo_x = geometry.margin() + ball_radius;
    let hi_x = geometry.width() - geometry.margin() - ball_radius;
    let lo_y = geometry.margin() + ball_radius;
    let hi_y = geometry.height() - geometry.margin() - ball_radius;

    // Left and right walls always bounce
    if ball.pos.x < lo_x {
        ball.pos.x = lo_x;
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.x > hi_x {
        ball.pos.x = hi_x;
        ball.vel.x = -ball.vel.x;
    }

    let mut event = None;

    if ball.pos.y < lo_y {
        match geometry.scoring_zone(Edge::Top, ball.pos.x) {
            Some(zone) => {
                event = Some(GoalEvent {
                    owner: zone.owner,
                    edge: Edge::Top,
                });
            }
            None => {
                ball.pos.y = lo_y;
                ball.vel.y = -ball.vel.y;
            }
        }
    }

    if ball.pos.y > hi_y {
        match geometry.scoring_zone(Edge::Bottom, ball.pos.x) {
            // First evaluated edge wins the tick; a second crossing bounces
            Some(zone) if event.is_none() => {
                event = Some(GoalEvent {
                    owner: zone.owner,
                    edge: Edge::Bottom,
                });
            }
            _ => {
                ball.pos.y = hi_y;
                ball.vel.y = -ball.vel.y;
            }
        }
    }

    event
}
