//! Tilt integration: one velocity and position step per tick

use crate::config::PhysicsConfig;

use super::state::{BallState, TiltSample};

/// Advance the ball by one fixed timestep, before boundary resolution.
///
/// Order matters: tilt accelerates, the per-component cap applies, friction
/// damps, then the position advances. The horizontal tilt component is sign
/// inverted (sensor frame convention, carried over as-is); the vertical
/// component is not.
///
/// Pure function of its inputs; total over well-formed floats.
pub fn integrate(ball: BallState, tilt: TiltSample, cfg: &PhysicsConfig) -> BallState {
    let mut vel = ball.vel;
    vel.x += -tilt.x * cfg.speed_factor;
    vel.y += tilt.y * cfg.speed_factor;

    // Component-wise cap. Clamp keeps the sign and never divides by |v|,
    // so a zero component can't blow up.
    vel.x = vel.x.clamp(-cfg.max_speed, cfg.max_speed);
    vel.y = vel.y.clamp(-cfg.max_speed, cfg.max_speed);

    vel *= cfg.friction;

    BallState {
        pos: ball.pos + vel,
        vel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::REST_EPSILON;
    use glam::Vec2;
    use proptest::prelude::*;

    fn cfg() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    #[test]
    fn test_horizontal_tilt_sign_inverted() {
        let ball = BallState::at_rest(Vec2::new(100.0, 100.0));
        let next = integrate(ball, TiltSample::new(1.0, 1.0), &cfg());
        // Positive x tilt pushes the ball in -x; positive y tilt in +y
        assert!(next.vel.x < 0.0);
        assert!(next.vel.y > 0.0);
    }

    #[test]
    fn test_velocity_capped_per_component() {
        let mut ball = BallState::at_rest(Vec2::ZERO);
        let c = cfg();
        for _ in 0..1000 {
            ball = integrate(ball, TiltSample::new(-10.0, 10.0), &c);
            assert!(ball.vel.x.abs() <= c.max_speed);
            assert!(ball.vel.y.abs() <= c.max_speed);
        }
        // Converged close to the cap (friction applies after the clamp)
        assert!(ball.vel.x > c.max_speed * 0.9);
        assert!(ball.vel.y > c.max_speed * 0.9);
    }

    #[test]
    fn test_zero_tilt_decays_to_rest() {
        let mut ball = BallState {
            pos: Vec2::new(50.0, 50.0),
            vel: Vec2::new(20.0, -15.0),
        };
        let c = cfg();
        let mut ticks = 0;
        while ball.speed() >= REST_EPSILON {
            let prev_speed = ball.speed();
            ball = integrate(ball, TiltSample::ZERO, &c);
            assert!(ball.speed() < prev_speed);
            // Friction never flips a component's direction
            assert!(ball.vel.x >= 0.0);
            assert!(ball.vel.y <= 0.0);
            ticks += 1;
            assert!(ticks < 10_000, "ball never came to rest");
        }
    }

    proptest! {
        #[test]
        fn prop_zero_tilt_speed_strictly_decreases(
            vx in -25.0f32..25.0,
            vy in -25.0f32..25.0,
        ) {
            prop_assume!(vx.abs() > REST_EPSILON || vy.abs() > REST_EPSILON);
            let ball = BallState { pos: Vec2::ZERO, vel: Vec2::new(vx, vy) };
            let next = integrate(ball, TiltSample::ZERO, &cfg());
            prop_assert!(next.speed() < ball.speed());
            // No spurious sign reversal on either component
            prop_assert!(next.vel.x * vx >= 0.0);
            prop_assert!(next.vel.y * vy >= 0.0);
        }

        #[test]
        fn prop_velocity_always_within_cap(
            vx in -1000.0f32..1000.0,
            vy in -1000.0f32..1000.0,
            tx in -50.0f32..50.0,
            ty in -50.0f32..50.0,
        ) {
            let c = cfg();
            let ball = BallState { pos: Vec2::ZERO, vel: Vec2::new(vx, vy) };
            let next = integrate(ball, TiltSample::new(tx, ty), &c);
            prop_assert!(next.vel.x.abs() <= c.max_speed);
            prop_assert!(next.vel.y.abs() <= c.max_speed);
        }
    }
}
