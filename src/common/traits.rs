//! Common traits defining interfaces for the planner and its collaborators

use crate::common::error::RoboticsResult;
use crate::common::types::*;

/// Trait for route planners producing a pose sequence
pub trait PathPlanner {
    /// Plan the whole route
    fn plan(&mut self) -> RoboticsResult<Vec<Pose2D>>;
}

/// Trait for vehicle/robot motion models
pub trait MotionModel {
    /// State type
    type State;
    /// Control type
    type Control;

    /// Propagate state forward in time
    fn propagate(&self, state: &Self::State, control: &Self::Control, dt: f64) -> Self::State;
}

/// Vehicle geometry the planner checks candidate poses against.
///
/// Implementors hold a pose register (`center`, `orientation`, `set_pose`)
/// but the planner only evaluates trial poses through [`Vehicle::collides_at`],
/// so the register is written once per committed step.
pub trait Vehicle {
    /// Current center position
    fn center(&self) -> Point2D;

    /// Current heading [rad]
    fn orientation(&self) -> f64;

    /// Radius of the vehicle footprint [m]
    fn radius(&self) -> f64;

    /// Vehicle length, used as the wheelbase [m]
    fn length(&self) -> f64;

    /// Overwrite the pose register
    fn set_pose(&mut self, pose: Pose2D);

    /// Collision test of the vehicle placed at `pose` against `hull`
    fn collides_at(&self, pose: &Pose2D, hull: &Hull) -> bool;

    /// Current pose
    fn pose(&self) -> Pose2D {
        Pose2D::from_position(self.center(), self.orientation())
    }

    /// Collision test at the current pose
    fn check_collision(&self, hull: &Hull) -> bool {
        self.collides_at(&self.pose(), hull)
    }
}
