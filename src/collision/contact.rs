// Contact-point resolution for a pair of overlapping convex bodies

use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::polygon_centroid;

use super::detection::point_in_polygon;

/// Points outlining the intersection region of two bodies: vertices of each
/// body lying inside the other, then every crossing between their edges.
/// Duplicates are kept; they do not move the centroid of the region.
pub fn contact_candidates(left: &RigidBody, right: &RigidBody) -> Vec<Vec2> {
    let mut points = Vec::new();

    points.extend(left.world_points().iter().copied().filter(|&p| point_in_polygon(p, right)));
    points.extend(right.world_points().iter().copied().filter(|&p| point_in_polygon(p, left)));

    for left_edge in left.edges() {
        for right_edge in right.edges() {
            if let Some(point) = left_edge.intersection_point(right_edge) {
                points.push(point);
            }
        }
    }
    points
}

/// Centroid of the region outlined by an unordered point set.
///
/// The points are ordered by polar angle around their mean and the fan
/// centroid of that outline is returned. `None` for an empty set.
pub fn ordered_centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let mut sum = Vec2::ZERO;
    for &p in points {
        sum += p;
    }
    let pseudo_center = sum / points.len() as f64;

    let mut shifted: Vec<Vec2> = points.iter().map(|&p| p - pseudo_center).collect();
    shifted.sort_by(|a, b| a.angle().total_cmp(&b.angle()));

    polygon_centroid(&shifted).map(|c| c + pseudo_center)
}

/// Contact point of two bodies already known to overlap, or `None` when the
/// intersection region has no points.
pub fn resolve_contact(left: &RigidBody, right: &RigidBody) -> Option<Vec2> {
    ordered_centroid(&contact_candidates(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn square(x: f64, y: f64) -> RigidBody {
        RigidBody::rect(Vec2::new(x, y), 1.0, 1.0, 1.0).expect("valid square")
    }

    #[test]
    fn test_ordered_centroid_small_sets() {
        assert!(ordered_centroid(&[]).is_none());

        let single = ordered_centroid(&[Vec2::new(2.0, 3.0)]).expect("one point");
        assert!((single - Vec2::new(2.0, 3.0)).magnitude() < EPSILON);

        let pair = ordered_centroid(&[Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0)]).expect("two points");
        assert!((pair - Vec2::new(1.0, 2.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_ordered_centroid_unordered_square() {
        // Corners of a 2x2 square in scrambled order
        let points = [
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 0.0),
        ];
        let c = ordered_centroid(&points).expect("non-empty");
        assert!((c - Vec2::new(1.0, 1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_ordered_centroid_is_area_weighted() {
        // Right triangle: area centroid differs from the vertex mean only with
        // extra points on an edge.
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
        ];
        let c = ordered_centroid(&points).expect("non-empty");
        assert!((c - Vec2::new(1.0, 1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_contact_candidates_overlapping_squares() {
        let a = square(0.0, 0.0);
        let b = square(0.9, 0.0);
        let points = contact_candidates(&a, &b);
        assert!(!points.is_empty());
        for p in &points {
            assert!(p.x >= 0.4 - EPSILON && p.x <= 0.5 + EPSILON);
            assert!(p.y.abs() <= 0.5 + EPSILON);
        }
    }

    #[test]
    fn test_resolve_contact_overlapping_squares() {
        let a = square(0.0, 0.0);
        let b = square(0.9, 0.0);
        let c = resolve_contact(&a, &b).expect("overlap has a contact point");
        assert!((c.x - 0.45).abs() < EPSILON);
        assert!(c.y.abs() < EPSILON);
    }

    #[test]
    fn test_resolve_contact_disjoint_is_none() {
        let a = square(0.0, 0.0);
        let b = square(3.0, 0.0);
        assert!(contact_candidates(&a, &b).is_empty());
        assert!(resolve_contact(&a, &b).is_none());
    }

    #[test]
    fn test_resolve_contact_nested() {
        let outer = RigidBody::rect(Vec2::ZERO, 4.0, 4.0, 1.0).expect("valid box");
        let inner = square(0.5, -0.5);
        let c = resolve_contact(&outer, &inner).expect("nested bodies intersect");
        assert!((c - Vec2::new(0.5, -0.5)).magnitude() < EPSILON);
    }
}
