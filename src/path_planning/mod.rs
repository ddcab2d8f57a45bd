//! Local Planner Module
//!
//! Refines a coarse global path into kinematically feasible poses of an
//! Ackermann vehicle while keeping clear of polygonal obstacles.
//!
//! # Components
//!
//! - `potential_field`: attractive and repulsive potentials scoring a pose
//! - `motion_model`: kinematic bicycle model
//! - `expansion`: feasible successors of a pose over the control set
//! - `segment_planner`: greedy refinement of one waypoint pair
//! - `local_planner`: stitches the segments of a whole route
//! - `config`: planner parameters, loadable from TOML
//!
//! # Edge distance
//!
//! By default obstacle repulsion uses the distance to the infinite line
//! through each hull edge. Those lines cross the whole plane, so a route can
//! stall next to an edge extension far away from the hull itself.
//! `EdgeDistance::Segment` measures to the edge segment instead. The demo
//! scenario in `params/corridor.toml` only completes in segment mode.
//!
//! # Example
//!
//! ```
//! use ackermann_local_planner::common::{Hull, Path2D, PathPlanner, Point2D};
//! use ackermann_local_planner::path_planning::{EdgeDistance, LocalPlanner, LocalPlannerConfig};
//!
//! let route = Path2D::from_xy(&[0.0, 4.0], &[0.0, 0.0]);
//! let hulls = vec![Hull::rectangle(Point2D::new(1.5, 0.6), Point2D::new(2.5, 1.2))];
//!
//! let mut config = LocalPlannerConfig::default();
//! config.potential.edge_distance = EdgeDistance::Segment;
//!
//! let mut planner = LocalPlanner::with_vehicle_length(route, hulls, 0.36, config).unwrap();
//! let poses = planner.plan().unwrap();
//! assert!(poses.last().unwrap().position().distance(&Point2D::new(4.0, 0.0)) <= 0.2);
//! ```

pub mod config;
pub mod potential_field;
pub mod motion_model;
pub mod expansion;
pub mod segment_planner;
pub mod local_planner;

pub use config::{LocalPlannerConfig, PotentialFieldConfig};
pub use potential_field::{shortest_distance_to_hull, EdgeDistance, PotentialField};
pub use motion_model::AckermannModel;
pub use expansion::{Candidate, KinematicExpansion};
pub use segment_planner::{LocalSegment, SegmentPlanner};
pub use local_planner::LocalPlanner;
