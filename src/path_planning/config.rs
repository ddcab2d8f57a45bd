//! Local planner parameters
//!
//! All fields have defaults, so a parameter file only needs to list the
//! values it changes:
//!
//! ```toml
//! goal_tolerance = 0.25
//!
//! [potential]
//! attractive_threshold = 4.0
//! ```

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::common::{RoboticsError, RoboticsResult, SteeringControl};

use super::potential_field::EdgeDistance;

/// Potential field gains and thresholds
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PotentialFieldConfig {
    /// Gain of the attractive potential
    pub attractive_gain: f64,
    /// Distance to the goal where the attractive potential turns from quadratic to conic [m]
    pub attractive_threshold: f64,
    /// Gain of the repulsive potential
    pub repulsive_gain: f64,
    /// Repulsion range as a multiple of the vehicle radius
    pub repulsive_range_factor: f64,
    /// Distance measure between the vehicle center and hull edges
    pub edge_distance: EdgeDistance,
}

impl Default for PotentialFieldConfig {
    fn default() -> Self {
        Self {
            attractive_gain: 1.0,
            attractive_threshold: 5.0,
            repulsive_gain: 0.5,
            repulsive_range_factor: 2.0,
            edge_distance: EdgeDistance::Line,
        }
    }
}

/// Configuration for the local planner
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalPlannerConfig {
    /// Signed travel speeds of the control set [m/s]
    pub speeds: Vec<f64>,
    /// Steering angles of the control set [deg]
    pub steering_angles_deg: Vec<f64>,
    /// Integration time step [s]
    pub dt: f64,
    /// Distance at which a waypoint counts as reached [m]
    pub goal_tolerance: f64,
    /// Heading at the first waypoint [rad]
    pub initial_heading: f64,
    /// Greedy steps allowed per segment
    pub max_iterations: usize,
    /// Steps allowed without getting closer to the waypoint than ever before
    pub stall_window: usize,
    /// Potential field parameters
    pub potential: PotentialFieldConfig,
}

impl Default for LocalPlannerConfig {
    fn default() -> Self {
        Self {
            speeds: vec![-0.1, 0.1],
            steering_angles_deg: vec![-22.0, -15.0, -7.0, 0.0, 7.0, 15.0, 22.0],
            dt: 0.5,
            goal_tolerance: 0.2,
            initial_heading: 0.0,
            max_iterations: 5000,
            stall_window: 400,
            potential: PotentialFieldConfig::default(),
        }
    }
}

impl LocalPlannerConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(s: &str) -> RoboticsResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> RoboticsResult<Self> {
        let s = read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Control set, speed outer and steering angle inner.
    ///
    /// The order is the tie-break order of equally scored candidates.
    pub fn controls(&self) -> Vec<SteeringControl> {
        self.speeds
            .iter()
            .flat_map(|&speed| {
                self.steering_angles_deg
                    .iter()
                    .map(move |&angle| SteeringControl::new(speed, angle))
            })
            .collect()
    }

    pub fn validate(&self) -> RoboticsResult<()> {
        if self.speeds.is_empty() || self.steering_angles_deg.is_empty() {
            return Err(invalid("control set must contain at least one speed and one steering angle"));
        }
        if self.speeds.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(invalid("speeds must be finite and non-zero"));
        }
        if self.steering_angles_deg.iter().any(|a| a.abs() >= 90.0 || !a.is_finite()) {
            return Err(invalid("steering angles must lie strictly between -90 and 90 degrees"));
        }
        if !(self.dt > 0.0) {
            return Err(invalid("dt must be positive"));
        }
        if !(self.goal_tolerance > 0.0) {
            return Err(invalid("goal_tolerance must be positive"));
        }
        if self.max_iterations == 0 || self.stall_window == 0 {
            return Err(invalid("max_iterations and stall_window must be positive"));
        }

        let p = &self.potential;
        if !(p.attractive_gain >= 0.0) || !(p.attractive_threshold > 0.0) {
            return Err(invalid("attractive gain must be non-negative and its threshold positive"));
        }
        if !(p.repulsive_gain >= 0.0) || !(p.repulsive_range_factor > 0.0) {
            return Err(invalid("repulsive gain must be non-negative and its range factor positive"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> RoboticsError {
    RoboticsError::InvalidParameter(msg.to_string())
}
