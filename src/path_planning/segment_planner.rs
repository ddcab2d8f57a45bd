//! Greedy best-first refinement of one route segment
//!
//! From the segment start the planner repeatedly expands the current pose and
//! commits to the lowest scoring feasible successor until the waypoint is
//! within the goal tolerance. No cost-to-come is accumulated and committed
//! poses are never revisited, so the search can settle in a local minimum of
//! the potential field. Two cutoffs bound it: a hard iteration limit, and a
//! window of steps in which the vehicle must get closer to the waypoint than
//! it has been before.

use log::{debug, info, trace};

use crate::common::{Hull, Point2D, Pose2D, RoboticsError, RoboticsResult, Vehicle};
use crate::utils::geometry::euclidean_distance;

use super::config::LocalPlannerConfig;
use super::expansion::KinematicExpansion;
use super::motion_model::AckermannModel;
use super::potential_field::PotentialField;

/// Refined poses of one `from -> to` leg of the route
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSegment {
    /// Position of the segment in the route
    pub index: usize,
    pub from: Point2D,
    pub to: Point2D,
    /// Position of the pose that satisfied the goal tolerance
    pub reached: Point2D,
    /// Poses from the start to the reaching pose, both included
    pub poses: Vec<Pose2D>,
}

impl LocalSegment {
    /// Number of greedy steps taken
    pub fn steps(&self) -> usize {
        self.poses.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
pub struct SegmentPlanner {
    expansion: KinematicExpansion,
    goal_tolerance: f64,
    max_iterations: usize,
    stall_window: usize,
}

impl SegmentPlanner {
    /// Planner for a vehicle with the given wheelbase and footprint radius
    pub fn new(config: &LocalPlannerConfig, wheelbase: f64, vehicle_radius: f64) -> Self {
        let expansion = KinematicExpansion::new(
            AckermannModel::new(wheelbase),
            config.controls(),
            config.dt,
            PotentialField::new(&config.potential, vehicle_radius),
        );
        Self {
            expansion,
            goal_tolerance: config.goal_tolerance,
            max_iterations: config.max_iterations,
            stall_window: config.stall_window,
        }
    }

    pub fn expansion(&self) -> &KinematicExpansion {
        &self.expansion
    }

    pub fn goal_tolerance(&self) -> f64 {
        self.goal_tolerance
    }

    /// Refine the leg `from -> to`.
    ///
    /// The start heading is read from the vehicle, and the vehicle pose is
    /// set to every committed pose, so on return it holds the reaching pose.
    pub fn plan<V: Vehicle>(
        &self,
        index: usize,
        from: Point2D,
        to: Point2D,
        vehicle: &mut V,
        hulls: &[Hull],
    ) -> RoboticsResult<LocalSegment> {
        let mut current = Pose2D::from_position(from, vehicle.orientation());
        vehicle.set_pose(current);

        let mut poses = vec![current];
        let mut distance = euclidean_distance(current.position(), to);
        let mut best_distance = distance;
        let mut last_improvement = 0;
        let mut iterations = 0;

        while distance > self.goal_tolerance {
            if iterations >= self.max_iterations || iterations - last_improvement >= self.stall_window {
                debug!(
                    "Segment {} stalled after {} iterations, {:.3} m from waypoint",
                    index, iterations, distance
                );
                return Err(RoboticsError::SearchStalled {
                    segment: index,
                    iterations,
                    pose: current,
                });
            }

            let best = match self.expansion.successors(&current, to, vehicle, hulls).first() {
                Some(candidate) => *candidate,
                None => {
                    debug!("Segment {}: every motion from {} collides", index, current);
                    return Err(RoboticsError::NoFeasibleMotion {
                        segment: index,
                        pose: current,
                    });
                }
            };

            iterations += 1;
            current = best.pose;
            vehicle.set_pose(current);
            poses.push(current);

            distance = euclidean_distance(current.position(), to);
            if distance < best_distance {
                best_distance = distance;
                last_improvement = iterations;
            }
            trace!(
                "Segment {} step {}: pose {} score {:.4} distance {:.3}",
                index, iterations, current, best.score, distance
            );
        }

        info!("Local path found for segment {} in {} steps", index, iterations);
        Ok(LocalSegment {
            index,
            from,
            to,
            reached: current.position(),
            poses,
        })
    }
}
