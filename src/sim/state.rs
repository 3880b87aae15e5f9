//! Ball, score, and snapshot types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::{FieldGeometry, OwnerId};

/// Latest 2-axis device tilt reading
///
/// Produced externally; the sim only ever consumes the most recent value and
/// keeps nothing beyond the current tick. Stale or duplicate samples across
/// ticks are expected and harmless.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
}

impl TiltSample {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Ball position and velocity
///
/// After a resolved tick the position lies within the margin-inset field on
/// both axes, except instantaneously while crossing a goal mouth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl BallState {
    /// Ball at rest at the given point
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// One owner's goal counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub owner: OwnerId,
    pub goals: u32,
}

/// Per-owner goal counters, in goal-declaration order
///
/// Counters only increase, except through an explicit `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    /// Board with one zeroed counter per distinct owner, in declaration order
    pub fn for_geometry(geometry: &FieldGeometry) -> Self {
        let mut board = Self::default();
        for zone in geometry.goals() {
            if !board.entries.iter().any(|e| e.owner == zone.owner) {
                board.entries.push(ScoreEntry {
                    owner: zone.owner,
                    goals: 0,
                });
            }
        }
        board
    }

    /// Credit one goal to `owner`, creating the counter if needed
    pub fn record(&mut self, owner: OwnerId) {
        match self.entries.iter_mut().find(|e| e.owner == owner) {
            Some(entry) => entry.goals += 1,
            None => self.entries.push(ScoreEntry { owner, goals: 1 }),
        }
    }

    pub fn get(&self, owner: OwnerId) -> u32 {
        self.entries
            .iter()
            .find(|e| e.owner == owner)
            .map(|e| e.goals)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.goals).sum()
    }

    /// Zero every counter, keeping declaration order
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.goals = 0;
        }
    }
}

/// Complete simulation state for one session
///
/// Owned by the simulation loop; readers only ever see `Snapshot` copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub geometry: FieldGeometry,
    pub ball: BallState,
    pub scores: ScoreBoard,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// New session: ball at rest at field center, zeroed scores
    pub fn new(geometry: FieldGeometry) -> Self {
        let ball = BallState::at_rest(geometry.center());
        let scores = ScoreBoard::for_geometry(&geometry);
        Self {
            geometry,
            ball,
            scores,
            time_ticks: 0,
        }
    }

    /// Replace the field wholesale (resize); ball and scores carry over
    pub fn set_geometry(&mut self, geometry: FieldGeometry) {
        self.geometry = geometry;
    }

    /// Immutable point-in-time copy for readers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball,
            scores: self.scores.clone(),
            tick: self.time_ticks,
        }
    }
}

/// Immutable view published once per tick, safe for concurrent reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: BallState,
    pub scores: ScoreBoard,
    pub tick: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::field::{Edge, GoalZone};

    fn two_goal_geometry() -> FieldGeometry {
        FieldGeometry::new(
            800.0,
            480.0,
            10.0,
            vec![
                GoalZone {
                    edge: Edge::Top,
                    x_min: 300.0,
                    x_max: 500.0,
                    owner: 1,
                },
                GoalZone {
                    edge: Edge::Bottom,
                    x_min: 300.0,
                    x_max: 500.0,
                    owner: 2,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_scoreboard_declaration_order() {
        let board = ScoreBoard::for_geometry(&two_goal_geometry());
        let owners: Vec<_> = board.entries().iter().map(|e| e.owner).collect();
        assert_eq!(owners, vec![1, 2]);
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_scoreboard_record_and_reset() {
        let mut board = ScoreBoard::for_geometry(&two_goal_geometry());
        board.record(2);
        board.record(2);
        board.record(1);
        assert_eq!(board.get(1), 1);
        assert_eq!(board.get(2), 2);
        assert_eq!(board.total(), 3);

        board.reset();
        assert_eq!(board.total(), 0);
        // Order survives the reset
        let owners: Vec<_> = board.entries().iter().map(|e| e.owner).collect();
        assert_eq!(owners, vec![1, 2]);
    }

    #[test]
    fn test_new_session_ball_at_center() {
        let state = SimState::new(two_goal_geometry());
        assert_eq!(state.ball.pos, glam::Vec2::new(400.0, 240.0));
        assert_eq!(state.ball.vel, glam::Vec2::ZERO);
        assert_eq!(state.time_ticks, 0);
    }
}
