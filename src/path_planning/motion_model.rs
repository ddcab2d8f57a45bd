//! Motion model for the local planner
//!
//! Kinematic bicycle model of an Ackermann vehicle. The heading is integrated
//! first and the position step uses the updated heading.

use crate::common::{MotionModel, Pose2D, SteeringControl};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AckermannModel {
    wheelbase: f64,
}

impl AckermannModel {
    pub fn new(wheelbase: f64) -> Self {
        Self { wheelbase }
    }

    /// Get wheelbase
    pub fn wheelbase(&self) -> f64 {
        self.wheelbase
    }
}

impl MotionModel for AckermannModel {
    type State = Pose2D;
    type Control = SteeringControl;

    fn propagate(&self, state: &Pose2D, control: &SteeringControl, dt: f64) -> Pose2D {
        let u = control.speed;
        let yaw = state.yaw + (u * control.steering_angle().tan() / self.wheelbase) * dt;

        Pose2D {
            x: state.x + u * yaw.cos() * dt,
            y: state.y + u * yaw.sin() * dt,
            yaw,
        }
    }
}
