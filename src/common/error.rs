//! Error types for ackermann_local_planner

use thiserror::Error;

use crate::common::types::Pose2D;

/// Main error type for the local planner
#[derive(Debug, Error)]
pub enum RoboticsError {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Obstacle hull with too few vertices to close a polygon
    #[error("Hull {index} has {vertices} vertices, at least 3 are required")]
    DegenerateHull { index: usize, vertices: usize },

    /// Every candidate motion from `pose` collides with an obstacle
    #[error("No feasible motion in segment {segment} from pose {pose}")]
    NoFeasibleMotion { segment: usize, pose: Pose2D },

    /// The greedy search hit its iteration limit or stopped making progress
    #[error("Search stalled in segment {segment} after {iterations} iterations at pose {pose}")]
    SearchStalled {
        segment: usize,
        iterations: usize,
        pose: Pose2D,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parameter file could not be parsed
    #[error("Cannot read the parameter file: {0}")]
    ConfigError(#[from] toml::de::Error),
}

impl RoboticsError {
    /// Index of the route segment that failed, if the error came from the search
    pub fn segment(&self) -> Option<usize> {
        match self {
            RoboticsError::NoFeasibleMotion { segment, .. }
            | RoboticsError::SearchStalled { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

/// Result type alias for planner operations
pub type RoboticsResult<T> = Result<T, RoboticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoboticsError::NoFeasibleMotion {
            segment: 2,
            pose: Pose2D::new(1.0, 0.5, 0.0),
        };
        assert_eq!(
            format!("{}", err),
            "No feasible motion in segment 2 from pose (1.000, 0.500, yaw 0.000)"
        );
        assert_eq!(err.segment(), Some(2));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RoboticsError = io_err.into();
        assert!(matches!(err, RoboticsError::IoError(_)));
        assert_eq!(err.segment(), None);
    }
}
