//! Local planner over a whole global path
//!
//! Every consecutive waypoint pair of the global path is refined by the
//! segment planner. After each segment the next waypoint is moved to the
//! position actually reached, so the following segment starts exactly where
//! the previous one stopped and the stored global path follows the refinement.

use log::{debug, info};

use crate::common::{
    Hull, Path2D, PathPlanner, Point2D, Pose2D, RoboticsError, RoboticsResult, Vehicle,
};
use crate::vehicle::{DiscVehicle, DEFAULT_VEHICLE_LENGTH};

use super::config::LocalPlannerConfig;
use super::segment_planner::{LocalSegment, SegmentPlanner};

pub struct LocalPlanner<V: Vehicle = DiscVehicle> {
    global_path: Path2D,
    hulls: Vec<Hull>,
    vehicle: V,
    initial_heading: f64,
    segment_planner: SegmentPlanner,
}

impl LocalPlanner<DiscVehicle> {
    /// Planner with the default vehicle length and configuration
    pub fn with_defaults(global_path: Path2D, hulls: Vec<Hull>) -> RoboticsResult<Self> {
        Self::with_vehicle_length(global_path, hulls, DEFAULT_VEHICLE_LENGTH, LocalPlannerConfig::default())
    }

    /// Planner for a disc shaped vehicle of the given length
    pub fn with_vehicle_length(
        global_path: Path2D,
        hulls: Vec<Hull>,
        vehicle_length: f64,
        config: LocalPlannerConfig,
    ) -> RoboticsResult<Self> {
        let start = global_path.points.first().copied().unwrap_or_else(Point2D::origin);
        let vehicle = DiscVehicle::new(Pose2D::from_position(start, config.initial_heading), vehicle_length)?;
        Self::new(global_path, hulls, vehicle, config)
    }
}

impl<V: Vehicle> LocalPlanner<V> {
    pub fn new(
        global_path: Path2D,
        hulls: Vec<Hull>,
        mut vehicle: V,
        config: LocalPlannerConfig,
    ) -> RoboticsResult<Self> {
        config.validate()?;
        if global_path.len() < 2 {
            return Err(RoboticsError::InvalidParameter(format!(
                "global path needs at least 2 waypoints, got {}",
                global_path.len()
            )));
        }
        if let Some(index) = global_path.points.iter().position(|p| !p.is_finite()) {
            return Err(RoboticsError::InvalidParameter(format!(
                "waypoint {} is not finite: ({}, {})",
                index, global_path.points[index].x, global_path.points[index].y
            )));
        }
        for (index, hull) in hulls.iter().enumerate() {
            hull.validate(index)?;
        }
        let (length, radius) = (vehicle.length(), vehicle.radius());
        if !(length > 0.0) || !(radius >= 0.0) {
            return Err(RoboticsError::InvalidParameter(format!(
                "vehicle length must be positive and radius non-negative, got {} and {}",
                length, radius
            )));
        }

        vehicle.set_pose(Pose2D::from_position(global_path.points[0], config.initial_heading));
        let segment_planner = SegmentPlanner::new(&config, length, radius);

        Ok(Self {
            global_path,
            hulls,
            vehicle,
            initial_heading: config.initial_heading,
            segment_planner,
        })
    }

    /// Global path, with every reached waypoint re-anchored after planning
    pub fn global_path(&self) -> &Path2D {
        &self.global_path
    }

    pub fn hulls(&self) -> &[Hull] {
        &self.hulls
    }

    pub fn vehicle(&self) -> &V {
        &self.vehicle
    }

    /// Refine every segment of the global path, stopping at the first
    /// segment that fails.
    pub fn plan_segments(&mut self) -> RoboticsResult<Vec<LocalSegment>> {
        self.vehicle.set_pose(Pose2D::from_position(self.global_path.points[0], self.initial_heading));

        let n_segments = self.global_path.len() - 1;
        let mut segments = Vec::with_capacity(n_segments);

        for index in 0..n_segments {
            let from = self.global_path.points[index];
            let to = self.global_path.points[index + 1];

            let segment = self
                .segment_planner
                .plan(index, from, to, &mut self.vehicle, &self.hulls)
                .map_err(|e| {
                    debug!("Route planning aborted: {}", e);
                    e
                })?;

            self.global_path.points[index + 1] = segment.reached;
            segments.push(segment);
        }

        info!(
            "All local paths found: {} segments, {} poses",
            segments.len(),
            segments.iter().map(|s| s.poses.len()).sum::<usize>()
        );
        Ok(segments)
    }
}

impl<V: Vehicle> PathPlanner for LocalPlanner<V> {
    /// Concatenated poses of every segment. Each segment starts with the
    /// pose its predecessor ended on.
    fn plan(&mut self) -> RoboticsResult<Vec<Pose2D>> {
        let segments = self.plan_segments()?;
        Ok(segments.into_iter().flat_map(|s| s.poses).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_route() -> Path2D {
        Path2D::from_xy(&[0.0, 2.0, 4.0], &[0.0, 0.0, 0.0])
    }

    #[test]
    fn test_stitches_two_segments() {
        let mut planner = LocalPlanner::with_defaults(straight_route(), vec![]).unwrap();
        let segments = planner.plan_segments().unwrap();
        assert_eq!(segments.len(), 2);

        let (first, second) = (&segments[0], &segments[1]);
        assert_eq!(second.from, first.reached);
        assert_eq!(second.poses[0].position(), first.reached);
        assert_eq!(second.poses[0].yaw, first.poses.last().unwrap().yaw);
        assert_eq!(planner.global_path().points[1], first.reached);
        assert_eq!(planner.global_path().points[2], second.reached);
        assert!(second.reached.distance(&Point2D::new(4.0, 0.0)) <= 0.2);
    }

    #[test]
    fn test_plan_concatenates_segments() {
        let mut reference = LocalPlanner::with_defaults(straight_route(), vec![]).unwrap();
        let segments = reference.plan_segments().unwrap();

        let mut planner = LocalPlanner::with_defaults(straight_route(), vec![]).unwrap();
        let poses = planner.plan().unwrap();

        assert_eq!(poses.len(), segments[0].poses.len() + segments[1].poses.len());
        let junction = segments[0].poses.len();
        assert_eq!(poses[junction].position(), segments[0].reached);
        assert_eq!(poses[junction - 1].position(), segments[0].reached);
    }

    #[test]
    fn test_rejects_short_global_path() {
        let path = Path2D::from_xy(&[0.0], &[0.0]);
        let result = LocalPlanner::with_defaults(path, vec![]);
        assert!(matches!(result, Err(RoboticsError::InvalidParameter(_))));
    }

    #[test]
    fn test_rejects_non_finite_input() {
        let path = Path2D::from_xy(&[0.0, f64::NAN], &[0.0, 0.0]);
        let result = LocalPlanner::with_defaults(path, vec![]);
        assert!(matches!(result, Err(RoboticsError::InvalidParameter(_))));

        let path = Path2D::from_xy(&[0.0, 2.0], &[f64::INFINITY, 0.0]);
        assert!(LocalPlanner::with_defaults(path, vec![]).is_err());

        let hull = Hull::from_xy(&[1.0, 2.0, 2.0], &[1.0, 1.0, f64::NAN]);
        let result = LocalPlanner::with_defaults(straight_route(), vec![hull]);
        assert!(matches!(result, Err(RoboticsError::InvalidParameter(_))));
    }

    #[test]
    fn test_rejects_degenerate_hull() {
        let hulls = vec![
            Hull::rectangle(Point2D::new(5.0, 5.0), Point2D::new(6.0, 6.0)),
            Hull::from_xy(&[1.0, 2.0], &[1.0, 1.0]),
        ];
        let result = LocalPlanner::with_defaults(straight_route(), hulls);
        assert!(matches!(
            result,
            Err(RoboticsError::DegenerateHull { index: 1, vertices: 2 })
        ));
    }

    #[test]
    fn test_failure_names_segment() {
        let cage = Hull::rectangle(Point2D::new(-1.0, -1.0), Point2D::new(1.0, 1.0));
        let mut planner = LocalPlanner::with_defaults(straight_route(), vec![cage]).unwrap();
        let err = planner.plan().unwrap_err();
        assert!(matches!(err, RoboticsError::NoFeasibleMotion { segment: 0, .. }));
        assert_eq!(err.segment(), Some(0));
    }

    #[test]
    fn test_initial_heading_from_config() {
        let config = LocalPlannerConfig {
            initial_heading: 0.3,
            ..LocalPlannerConfig::default()
        };
        let planner =
            LocalPlanner::with_vehicle_length(straight_route(), vec![], 0.5, config).unwrap();
        assert_eq!(planner.vehicle().orientation(), 0.3);
        assert_eq!(planner.vehicle().radius(), 0.25);
        assert_eq!(planner.vehicle().center(), Point2D::origin());
    }
}
