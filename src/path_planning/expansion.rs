//! Kinematic expansion of a pose over the discretized control set
//!
//! Every control is applied once from the current pose. Successors that
//! collide with any hull are dropped and the remaining ones are ranked by
//! their potential field score.

use ordered_float::OrderedFloat;

use crate::common::{Hull, MotionModel, Point2D, Pose2D, SteeringControl, Vehicle};

use super::motion_model::AckermannModel;
use super::potential_field::PotentialField;

/// A feasible successor pose and its heuristic score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub score: f64,
    pub pose: Pose2D,
}

/// Sort by ascending score. The sort is stable, so equally scored candidates
/// keep their control set order.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| OrderedFloat(c.score));
    candidates
}

#[derive(Debug, Clone)]
pub struct KinematicExpansion {
    model: AckermannModel,
    controls: Vec<SteeringControl>,
    dt: f64,
    field: PotentialField,
}

impl KinematicExpansion {
    pub fn new(
        model: AckermannModel,
        controls: Vec<SteeringControl>,
        dt: f64,
        field: PotentialField,
    ) -> Self {
        Self { model, controls, dt, field }
    }

    pub fn controls(&self) -> &[SteeringControl] {
        &self.controls
    }

    pub fn field(&self) -> &PotentialField {
        &self.field
    }

    /// Feasible successors of `pose`, best first. Empty when every control
    /// leads into an obstacle.
    pub fn successors<V: Vehicle>(
        &self,
        pose: &Pose2D,
        goal: Point2D,
        vehicle: &V,
        hulls: &[Hull],
    ) -> Vec<Candidate> {
        let candidates = self
            .controls
            .iter()
            .map(|control| self.model.propagate(pose, control, self.dt))
            .filter(|next| !hulls.iter().any(|hull| vehicle.collides_at(next, hull)))
            .map(|next| Candidate {
                score: self.field.heuristic(&next, goal, hulls),
                pose: next,
            })
            .collect();

        rank(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::config::LocalPlannerConfig;
    use crate::vehicle::DiscVehicle;

    fn expansion(vehicle: &DiscVehicle) -> KinematicExpansion {
        let config = LocalPlannerConfig::default();
        KinematicExpansion::new(
            AckermannModel::new(vehicle.length()),
            config.controls(),
            config.dt,
            PotentialField::new(&config.potential, vehicle.radius()),
        )
    }

    #[test]
    fn test_open_space_keeps_all_controls() {
        let vehicle = DiscVehicle::with_default_length(Pose2D::origin());
        let start = Pose2D::origin();
        let candidates = expansion(&vehicle).successors(&start, Point2D::new(5.0, 0.0), &vehicle, &[]);

        assert_eq!(candidates.len(), 14);
        for pair in candidates.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
        for c in &candidates {
            assert!(c.pose.position().distance(&start.position()) > 0.04);
        }
        // Straight ahead is closest to a goal straight ahead
        assert!((candidates[0].pose.x - 0.05).abs() < 1e-12);
        assert_eq!(candidates[0].pose.yaw, 0.0);
    }

    #[test]
    fn test_colliding_successors_are_dropped() {
        let vehicle = DiscVehicle::with_default_length(Pose2D::origin());
        // Forward steps end 0.15 m from the wall, inside the vehicle radius
        let wall = Hull::rectangle(Point2D::new(0.2, -1.0), Point2D::new(0.4, 1.0));
        let hulls = vec![wall];
        let goal = Point2D::new(5.0, 0.0);
        let expansion = expansion(&vehicle);
        let candidates = expansion.successors(&Pose2D::origin(), goal, &vehicle, &hulls);

        assert_eq!(candidates.len(), 7);
        for c in &candidates {
            assert!(c.score >= expansion.field().attractive_potential(c.pose.position(), goal));
            assert!(c.pose.x < 0.0);
            assert!(!vehicle.collides_at(&c.pose, &hulls[0]));
        }
    }

    #[test]
    fn test_boxed_in_has_no_successors() {
        let vehicle = DiscVehicle::with_default_length(Pose2D::origin());
        let cage = Hull::rectangle(Point2D::new(-1.0, -1.0), Point2D::new(1.0, 1.0));
        let candidates =
            expansion(&vehicle).successors(&Pose2D::origin(), Point2D::new(5.0, 0.0), &vehicle, &[cage]);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_rank_breaks_ties_by_insertion_order() {
        let tagged = |score: f64, tag: f64| Candidate {
            score,
            pose: Pose2D::new(tag, 0.0, 0.0),
        };
        let ranked = rank(vec![
            tagged(2.0, 0.0),
            tagged(1.0, 1.0),
            tagged(1.0, 2.0),
            tagged(0.5, 3.0),
            tagged(1.0, 4.0),
        ]);
        let tags: Vec<f64> = ranked.iter().map(|c| c.pose.x).collect();
        assert_eq!(tags, vec![3.0, 1.0, 2.0, 4.0, 0.0]);
    }
}
