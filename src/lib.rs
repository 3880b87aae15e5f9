//! Pocket Pitch - tilt-driven ball simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, boundary/goal resolution, scoring)
//! - `runner`: Fixed-cadence driver task with start/stop control
//! - `config`: Data-driven physics tuning
//!
//! Rendering and sensor lifecycle live with the host application; this crate
//! consumes the latest tilt sample and publishes an immutable snapshot per tick.

pub mod config;
pub mod runner;
pub mod sim;

pub use config::PhysicsConfig;
pub use runner::{ChannelTiltSource, SimulationLoop, TiltSource};
pub use sim::{
    BallState, Edge, FieldGeometry, GeometryError, GoalEvent, GoalZone, ScoreBoard, SimState,
    Snapshot, TiltSample,
};

/// Simulation constants
pub mod consts {
    use std::time::Duration;

    /// Fixed tick period (60 Hz target)
    pub const TICK_PERIOD: Duration = Duration::from_millis(16);

    /// Velocity damping applied once per tick
    pub const FRICTION: f32 = 0.98;
    /// Tilt-to-velocity gain per tick
    pub const SPEED_FACTOR: f32 = 0.3;
    /// Per-component velocity cap
    pub const MAX_SPEED: f32 = 25.0;
    /// Ball radius in field units
    pub const BALL_RADIUS: f32 = 20.0;

    /// Speed below which the ball counts as at rest
    pub const REST_EPSILON: f32 = 1e-3;
}
