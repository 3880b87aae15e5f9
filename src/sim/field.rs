//! Field geometry and goal zones
//!
//! A `FieldGeometry` is immutable for a session and replaced wholesale when
//! the playing surface is resized, so a tick never sees a half-updated
//! width/height pair.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies which side a goal credits
pub type OwnerId = u32;

/// Field edge that can carry a goal zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
}

/// Sub-segment of a horizontal field edge where crossing scores instead of
/// bouncing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalZone {
    pub edge: Edge,
    /// Horizontal extent, `x_min <= x_max`
    pub x_min: f32,
    pub x_max: f32,
    pub owner: OwnerId,
}

impl GoalZone {
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x_min && x <= self.x_max
    }
}

/// Invalid geometry, rejected at construction rather than mid-simulation
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("goal zone x range is inverted: {min} > {max}")]
    InvertedRange { min: f32, max: f32 },
    #[error("goal zone x range must be finite")]
    NonFiniteRange,
    #[error("margin must be finite and non-negative, got {0}")]
    InvalidMargin(f32),
}

/// Playing surface dimensions, collision margin, and goal zones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    width: f32,
    height: f32,
    margin: f32,
    goals: Vec<GoalZone>,
}

impl FieldGeometry {
    /// Build a field, validating the margin and every zone's x range
    pub fn new(
        width: f32,
        height: f32,
        margin: f32,
        goals: Vec<GoalZone>,
    ) -> Result<Self, GeometryError> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(GeometryError::InvalidMargin(margin));
        }
        for zone in &goals {
            if !zone.x_min.is_finite() || !zone.x_max.is_finite() {
                return Err(GeometryError::NonFiniteRange);
            }
            if zone.x_min > zone.x_max {
                return Err(GeometryError::InvertedRange {
                    min: zone.x_min,
                    max: zone.x_max,
                });
            }
        }
        Ok(Self {
            width,
            height,
            margin,
            goals,
        })
    }

    /// Plain walled field with no goals
    pub fn walled(width: f32, height: f32, margin: f32) -> Result<Self, GeometryError> {
        Self::new(width, height, margin, Vec::new())
    }

    /// Surface that has not been measured yet; bounce and goal checks stay
    /// suppressed until it is replaced with a real size
    pub fn unmeasured() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            margin: 0.0,
            goals: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Goal zones in declaration order
    pub fn goals(&self) -> &[GoalZone] {
        &self.goals
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True once the surface has a real measured size
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// First declared zone on `edge` whose mouth contains `x`
    pub fn scoring_zone(&self, edge: Edge, x: f32) -> Option<&GoalZone> {
        self.goals
            .iter()
            .find(|zone| zone.edge == edge && zone.contains_x(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_rejected() {
        let result = FieldGeometry::new(
            800.0,
            480.0,
            10.0,
            vec![GoalZone {
                edge: Edge::Top,
                x_min: 600.0,
                x_max: 200.0,
                owner: 1,
            }],
        );
        assert_eq!(
            result.unwrap_err(),
            GeometryError::InvertedRange {
                min: 600.0,
                max: 200.0
            }
        );
    }

    #[test]
    fn test_negative_margin_rejected() {
        let result = FieldGeometry::walled(800.0, 480.0, -1.0);
        assert_eq!(result.unwrap_err(), GeometryError::InvalidMargin(-1.0));
    }

    #[test]
    fn test_non_finite_range_rejected() {
        let result = FieldGeometry::new(
            800.0,
            480.0,
            0.0,
            vec![GoalZone {
                edge: Edge::Bottom,
                x_min: f32::NAN,
                x_max: 100.0,
                owner: 2,
            }],
        );
        assert_eq!(result.unwrap_err(), GeometryError::NonFiniteRange);
    }

    #[test]
    fn test_scoring_zone_lookup() {
        let geometry = FieldGeometry::new(
            800.0,
            480.0,
            10.0,
            vec![
                GoalZone {
                    edge: Edge::Top,
                    x_min: 200.0,
                    x_max: 600.0,
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
        .unwrap();

        assert_eq!(geometry.scoring_zone(Edge::Top, 400.0).unwrap().owner, 1);
        assert_eq!(geometry.scoring_zone(Edge::Bottom, 400.0).unwrap().owner, 2);
        // Outside the mouth, and on an edge the zone doesn't cover
        assert!(geometry.scoring_zone(Edge::Top, 0.0).is_none());
        assert!(geometry.scoring_zone(Edge::Bottom, 250.0).is_none());
    }

    #[test]
    fn test_unmeasured_suppression_flag() {
        assert!(!FieldGeometry::unmeasured().is_measured());
        assert!(FieldGeometry::walled(800.0, 480.0, 0.0).unwrap().is_measured());
    }
}
