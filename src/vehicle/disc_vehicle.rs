//! Circular footprint of an Ackermann vehicle
//!
//! The footprint is a disc around the vehicle center whose radius is half the
//! vehicle length. It overlaps an obstacle hull when the center lies inside
//! the polygon or any hull edge passes closer than the radius.

use crate::common::{Hull, Point2D, Pose2D, RoboticsError, RoboticsResult, Vehicle};
use crate::utils::geometry::{point_in_polygon, segment_distance};

/// Default vehicle length [m]
pub const DEFAULT_VEHICLE_LENGTH: f64 = 0.36;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscVehicle {
    pose: Pose2D,
    length: f64,
}

impl DiscVehicle {
    pub fn new(pose: Pose2D, length: f64) -> RoboticsResult<Self> {
        if !(length > 0.0) || !length.is_finite() {
            return Err(RoboticsError::InvalidParameter(format!(
                "vehicle length must be positive, got {}",
                length
            )));
        }
        Ok(Self { pose, length })
    }

    pub fn with_default_length(pose: Pose2D) -> Self {
        Self { pose, length: DEFAULT_VEHICLE_LENGTH }
    }
}

impl Vehicle for DiscVehicle {
    fn center(&self) -> Point2D {
        self.pose.position()
    }

    fn orientation(&self) -> f64 {
        self.pose.yaw
    }

    fn radius(&self) -> f64 {
        self.length / 2.0
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn set_pose(&mut self, pose: Pose2D) {
        self.pose = pose;
    }

    fn pose(&self) -> Pose2D {
        self.pose
    }

    fn collides_at(&self, pose: &Pose2D, hull: &Hull) -> bool {
        let center = pose.position();
        if point_in_polygon(center, &hull.vertices) {
            return true;
        }
        let radius = self.radius();
        hull.edges().any(|(a, b)| segment_distance(center, a, b) < radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Hull {
        Hull::rectangle(Point2D::new(1.0, -0.5), Point2D::new(2.0, 0.5))
    }

    #[test]
    fn test_radius_is_half_length() {
        let vehicle = DiscVehicle::with_default_length(Pose2D::origin());
        assert!((vehicle.radius() - 0.18).abs() < 1e-12);
        assert!((vehicle.length() - DEFAULT_VEHICLE_LENGTH).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_length() {
        assert!(DiscVehicle::new(Pose2D::origin(), 0.0).is_err());
        assert!(DiscVehicle::new(Pose2D::origin(), f64::NAN).is_err());
    }

    #[test]
    fn test_collision_inside_and_near_edge() {
        let vehicle = DiscVehicle::with_default_length(Pose2D::origin());
        let hull = unit_box();
        assert!(vehicle.collides_at(&Pose2D::new(1.5, 0.0, 0.0), &hull));
        assert!(vehicle.collides_at(&Pose2D::new(0.9, 0.0, 0.0), &hull));
        assert!(!vehicle.collides_at(&Pose2D::new(0.5, 0.0, 0.0), &hull));
        // Close to the line through an edge but clear of the edge itself
        assert!(!vehicle.collides_at(&Pose2D::new(3.0, 0.55, 0.0), &hull));
    }

    #[test]
    fn test_pose_register() {
        let mut vehicle = DiscVehicle::with_default_length(Pose2D::origin());
        assert!(!vehicle.check_collision(&unit_box()));

        vehicle.set_pose(Pose2D::new(1.2, 0.1, 0.7));
        assert_eq!(vehicle.center(), Point2D::new(1.2, 0.1));
        assert_eq!(vehicle.orientation(), 0.7);
        assert!(vehicle.check_collision(&unit_box()));
    }
}
