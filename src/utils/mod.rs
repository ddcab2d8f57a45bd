//! Utility modules for ackermann_local_planner

pub mod geometry;
pub mod visualization;

pub use geometry::*;
pub use visualization::{plot_route, Visualizer, PathStyle, colors};
