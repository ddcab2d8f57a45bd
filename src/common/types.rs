//! Common types used throughout ackermann_local_planner

use std::fmt;

use itertools::Itertools;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::common::error::{RoboticsError, RoboticsResult};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 2D pose (position + heading).
///
/// The heading is kept as integrated and is never wrapped into a bounded
/// range, so it can grow without limit over a long route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn from_position(position: Point2D, yaw: f64) -> Self {
        Self { x: position.x, y: position.y, yaw }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl fmt::Display for Pose2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, yaw {:.3})", self.x, self.y, self.yaw)
    }
}

/// Steering command of an Ackermann vehicle for one planning step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringControl {
    /// Signed travel speed [m/s]
    pub speed: f64,
    /// Front wheel steering angle [deg]
    pub steering_angle_deg: f64,
}

impl SteeringControl {
    pub fn new(speed: f64, steering_angle_deg: f64) -> Self {
        Self { speed, steering_angle_deg }
    }

    pub fn steering_angle(&self) -> f64 {
        self.steering_angle_deg.to_radians()
    }
}

/// Path represented as a sequence of 2D points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len());
        let points = x.iter().zip(y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self { points }
    }

    pub fn from_poses(poses: &[Pose2D]) -> Self {
        Self { points: poses.iter().map(Pose2D::position).collect() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn total_length(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points.windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}

/// Closed obstacle polygon.
///
/// Edges are the consecutive vertex pairs plus the wrap-around edge from the
/// last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hull {
    pub vertices: Vec<Point2D>,
}

impl Hull {
    pub fn new(vertices: Vec<Point2D>) -> Self {
        Self { vertices }
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len());
        Self {
            vertices: x.iter().zip(y.iter()).map(|(&x, &y)| Point2D::new(x, y)).collect(),
        }
    }

    /// Axis aligned rectangle, counter-clockwise from the lower left corner
    pub fn rectangle(min: Point2D, max: Point2D) -> Self {
        Self::new(vec![
            Point2D::new(min.x, min.y),
            Point2D::new(max.x, min.y),
            Point2D::new(max.x, max.y),
            Point2D::new(min.x, max.y),
        ])
    }

    /// One `(a, b)` pair per edge, wrap-around edge last
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    /// Rejects hulls that cannot form a closed polygon or have non-finite
    /// vertices. `index` names the hull in the reported error.
    pub fn validate(&self, index: usize) -> RoboticsResult<()> {
        if self.vertices.len() < 3 {
            return Err(RoboticsError::DegenerateHull {
                index,
                vertices: self.vertices.len(),
            });
        }
        if let Some(vertex) = self.vertices.iter().find(|v| !v.is_finite()) {
            return Err(RoboticsError::InvalidParameter(format!(
                "hull {} has a non-finite vertex ({}, {})",
                index, vertex.x, vertex.y
            )));
        }
        Ok(())
    }
}
