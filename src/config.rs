//! Physics tuning
//!
//! Kept apart from the sim so a host can load its own values without touching
//! simulation code.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Per-session physics parameters
///
/// Fixed for the lifetime of a simulation loop; every tick reads the same
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Tilt-to-velocity gain per tick
    pub speed_factor: f32,
    /// Per-component velocity cap
    pub max_speed: f32,
    /// Damping multiplier in (0, 1)
    pub friction: f32,
    /// Ball radius in field units
    pub ball_radius: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            speed_factor: consts::SPEED_FACTOR,
            max_speed: consts::MAX_SPEED,
            friction: consts::FRICTION,
            ball_radius: consts::BALL_RADIUS,
        }
    }
}
