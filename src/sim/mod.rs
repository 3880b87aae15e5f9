//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No timing, I/O, or platform dependencies
//! - The tick is the sole mutator of ball and score state

pub mod boundary;
pub mod field;
pub mod integrate;
pub mod state;
pub mod tick;

pub use boundary::{GoalEvent, resolve_boundaries};
pub use field::{Edge, FieldGeometry, GeometryError, GoalZone, OwnerId};
pub use integrate::integrate;
pub use state::{BallState, ScoreBoard, ScoreEntry, SimState, Snapshot, TiltSample};
pub use tick::tick;
