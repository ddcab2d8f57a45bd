//! ackermann_local_planner - potential field local planner for Ackermann vehicles
//!
//! Refines a coarse global path into a dense sequence of kinematically
//! feasible poses that keep clear of polygonal obstacle hulls.

// Core modules
pub mod common;
pub mod utils;
pub mod vehicle;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, Path2D, Hull, SteeringControl};
pub use common::{PathPlanner, MotionModel, Vehicle};
pub use common::{RoboticsError, RoboticsResult};
pub use path_planning::{LocalPlanner, LocalPlannerConfig};
pub use vehicle::DiscVehicle;
