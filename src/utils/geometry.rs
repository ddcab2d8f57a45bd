//! Planar geometry helpers shared by the potential field and the vehicle model

use crate::common::Point2D;

/// Lengths below this are treated as zero when forming the triangle angle
const DEGENERATE_LENGTH: f64 = 1e-12;

/// Perpendicular distance from `point` to the infinite line through
/// `vertex_a` and `vertex_b`.
///
/// Treats `(vertex_a, vertex_b, point)` as a triangle and returns
/// `|vertex_a - point| * sin(angle)`, where the angle lies between the edge and
/// the leg towards `point`. The arc-cosine argument is clamped to [-1, 1] for
/// near colinear configurations. A zero-length edge has no direction, so the
/// distance to the vertex itself is returned.
pub fn perpendicular_distance(point: Point2D, vertex_a: Point2D, vertex_b: Point2D) -> f64 {
    let edge = vertex_a.to_vector() - vertex_b.to_vector();
    let leg = vertex_a.to_vector() - point.to_vector();

    let edge_len = edge.norm();
    let leg_len = leg.norm();

    if leg_len < DEGENERATE_LENGTH {
        return 0.0;
    }
    if edge_len < DEGENERATE_LENGTH {
        return leg_len;
    }

    let cos_theta = (edge.dot(&leg) / (edge_len * leg_len)).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();

    leg_len * theta.sin()
}

/// Planar distance between two points
pub fn euclidean_distance(p: Point2D, q: Point2D) -> f64 {
    p.distance(&q)
}

/// Distance from `point` to the closed segment between `a` and `b`
pub fn segment_distance(point: Point2D, a: Point2D, b: Point2D) -> f64 {
    let ab = b.to_vector() - a.to_vector();
    let ap = point.to_vector() - a.to_vector();

    let len_sq = ab.norm_squared();
    if len_sq < DEGENERATE_LENGTH * DEGENERATE_LENGTH {
        return ap.norm();
    }

    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    (ap - ab * t).norm()
}

/// Even-odd ray crossing test of `point` against a closed polygon
pub fn point_in_polygon(point: Point2D, vertices: &[Point2D]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_perpendicular_distance_simple() {
        let d = perpendicular_distance(
            Point2D::new(0.5, 2.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
        );
        assert!((d - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_perpendicular_distance_is_to_infinite_line() {
        // Beyond the segment end the distance is still measured to the line
        let d = perpendicular_distance(
            Point2D::new(5.0, -1.5),
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
        );
        assert!((d - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_perpendicular_distance_on_bisector() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = Point2D::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let angle: f64 = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
            let half_len = rng.gen_range(0.1..10.0);
            let b = Point2D::new(
                a.x + 2.0 * half_len * angle.cos(),
                a.y + 2.0 * half_len * angle.sin(),
            );
            let d = rng.gen_range(0.0..10.0);

            let mid = Point2D::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
            let normal = (-angle.sin(), angle.cos());
            let point = Point2D::new(mid.x + d * normal.0, mid.y + d * normal.1);

            let result = perpendicular_distance(point, a, b);
            assert!(result >= 0.0);
            assert!((result - d).abs() < 1e-6, "expected {}, got {}", d, result);
        }
    }

    #[test]
    fn test_perpendicular_distance_colinear() {
        // Rounding can push the cosine past 1.0 here
        let d = perpendicular_distance(
            Point2D::new(0.3, 0.1),
            Point2D::new(0.1, 0.1),
            Point2D::new(0.7, 0.1),
        );
        assert!(d.is_finite());
        assert!(d.abs() < 1e-7);
    }

    #[test]
    fn test_perpendicular_distance_zero_length_edge() {
        let v = Point2D::new(1.0, 1.0);
        let d = perpendicular_distance(Point2D::new(4.0, 5.0), v, v);
        assert!((d - 5.0).abs() < 1e-10);
        assert_eq!(perpendicular_distance(v, v, Point2D::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_euclidean_distance() {
        let d = euclidean_distance(Point2D::new(1.0, 1.0), Point2D::new(4.0, 5.0));
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoints() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 0.0);
        assert!((segment_distance(Point2D::new(0.5, 0.3), a, b) - 0.3).abs() < 1e-10);
        assert!((segment_distance(Point2D::new(4.0, 4.0), a, b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_in_polygon() {
        let square = [
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
        ];
        assert!(point_in_polygon(Point2D::new(1.0, 1.0), &square));
        assert!(!point_in_polygon(Point2D::new(3.0, 1.0), &square));
        assert!(!point_in_polygon(Point2D::new(1.0, 1.0), &square[..2]));
    }
}
