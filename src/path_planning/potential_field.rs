//! Potential field cost of a vehicle pose
//!
//! The score of a pose is the sum of an attractive potential towards the
//! current waypoint and a repulsive potential from every obstacle hull closer
//! than the repulsion range. Lower is better.

use serde::Deserialize;

use crate::common::{Hull, Point2D, Pose2D};
use crate::utils::geometry::{euclidean_distance, perpendicular_distance, segment_distance};

use super::config::PotentialFieldConfig;

/// Obstacle distances are floored here before inversion, so a vehicle center
/// lying on an edge saturates to a large finite repulsion.
pub const MIN_OBSTACLE_DISTANCE: f64 = 1e-9;

/// How the distance from the vehicle center to a hull edge is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDistance {
    /// Perpendicular distance to the infinite line through the edge
    Line,
    /// Distance to the closed edge segment
    Segment,
}

impl Default for EdgeDistance {
    fn default() -> Self {
        EdgeDistance::Line
    }
}

/// Shortest distance from `center` to any edge of `hull`, wrap-around edge
/// included. Each edge contributes exactly one distance.
pub fn shortest_distance_to_hull(center: Point2D, hull: &Hull) -> f64 {
    shortest_distance_with(center, hull, EdgeDistance::Line)
}

fn shortest_distance_with(center: Point2D, hull: &Hull, mode: EdgeDistance) -> f64 {
    hull.edges()
        .map(|(a, b)| match mode {
            EdgeDistance::Line => perpendicular_distance(center, a, b),
            EdgeDistance::Segment => segment_distance(center, a, b),
        })
        .fold(f64::INFINITY, f64::min)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PotentialField {
    attractive_gain: f64,
    attractive_threshold: f64,
    repulsive_gain: f64,
    repulsive_range: f64,
    edge_distance: EdgeDistance,
}

impl PotentialField {
    pub fn new(config: &PotentialFieldConfig, vehicle_radius: f64) -> Self {
        Self {
            attractive_gain: config.attractive_gain,
            attractive_threshold: config.attractive_threshold,
            repulsive_gain: config.repulsive_gain,
            repulsive_range: config.repulsive_range_factor * vehicle_radius,
            edge_distance: config.edge_distance,
        }
    }

    /// Distance below which a hull starts repelling [m]
    pub fn repulsive_range(&self) -> f64 {
        self.repulsive_range
    }

    /// Quadratic well within the threshold, conic growth beyond it
    pub fn attractive_potential(&self, position: Point2D, goal: Point2D) -> f64 {
        let d = euclidean_distance(position, goal);
        if d > self.attractive_threshold {
            self.conic_potential(d)
        } else {
            self.quadratic_potential(d)
        }
    }

    fn conic_potential(&self, d: f64) -> f64 {
        let (t, k) = (self.attractive_threshold, self.attractive_gain);
        t * k * d - 0.5 * k * t.powi(2)
    }

    fn quadratic_potential(&self, d: f64) -> f64 {
        0.5 * self.attractive_gain * d.powi(2)
    }

    /// Sum of the repulsion of every hull closer than the repulsion range.
    ///
    /// Each term grows strictly as the distance shrinks, down to
    /// `MIN_OBSTACLE_DISTANCE`. Below that floor the term is constant.
    pub fn repulsive_potential(&self, center: Point2D, hulls: &[Hull]) -> f64 {
        hulls
            .iter()
            .map(|hull| shortest_distance_with(center, hull, self.edge_distance))
            .filter(|&d| d < self.repulsive_range)
            .map(|d| self.repulsion(d))
            .sum()
    }

    fn repulsion(&self, d: f64) -> f64 {
        let d = d.max(MIN_OBSTACLE_DISTANCE);
        0.5 * self.repulsive_gain * (1.0 / d - 1.0 / self.repulsive_range).powi(2)
    }

    /// Heuristic score of `pose` while heading for `goal`
    pub fn heuristic(&self, pose: &Pose2D, goal: Point2D, hulls: &[Hull]) -> f64 {
        let position = pose.position();
        self.attractive_potential(position, goal) + self.repulsive_potential(position, hulls)
    }
}
