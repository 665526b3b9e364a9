use tracing::warn;

use crate::error::PhysicsError;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

use super::contact::resolve_contact;
use super::manifold::CollisionResult;

/// Normals closer to parallel than this are treated as the same axis.
pub const AXIS_PARALLEL_EPSILON: f64 = 1e-6;

/// Penetration depth of a circle into `body` along the unit `axis`.
///
/// The circle is placed on whichever side of the body's centroid its centre
/// lies, then the usual interval overlap is measured. Negative means the
/// axis separates them.
pub fn circle_depth(body: &RigidBody, center: Vec2, radius: f64, axis: Vec2) -> f64 {
    let between = (center - body.centroid()).dot(axis);
    let center_proj = center.dot(axis);
    let (max_left, min_right) = if between < 0.0 {
        (center_proj + radius, body.min_projection(axis))
    } else {
        (body.max_projection(axis), center_proj - radius)
    };
    max_left - min_right
}

/// Whether `point` lies inside or on the boundary of `body`.
pub fn point_in_polygon(point: Vec2, body: &RigidBody) -> bool {
    body.normals().iter().all(|&normal| circle_depth(body, point, 0.0, normal) >= 0.0)
}

/// Outward normals of both bodies with near-parallel duplicates removed.
/// Order is preserved: `a`'s normals first, then the new ones from `b`.
pub fn unique_axes(a: &RigidBody, b: &RigidBody) -> Vec<Vec2> {
    let mut axes: Vec<Vec2> = Vec::with_capacity(a.normals().len() + b.normals().len());
    for &normal in a.normals().iter().chain(b.normals()) {
        if axes.iter().all(|axis| axis.cross(normal).abs() >= AXIS_PARALLEL_EPSILON) {
            axes.push(normal);
        }
    }
    axes
}

/// Separating-axis test between two bodies followed by contact resolution.
///
/// Returns at the first separating axis. Otherwise the axis of minimum
/// penetration is kept with its left/right ordering and the contact point is
/// resolved; if the intersection region turns out empty the result is
/// downgraded to not colliding and flagged `retracted`.
pub fn collide(body_a: &RigidBody, body_a_idx: usize, body_b: &RigidBody, body_b_idx: usize) -> CollisionResult {
    let offset = body_b.centroid() - body_a.centroid();

    let mut min_depth = f64::INFINITY;
    let mut mtv_axis = Vec2::ZERO;
    let mut ordering = (body_a_idx, body_b_idx, false);

    for axis in unique_axes(body_a, body_b) {
        let b_is_left = offset.dot(axis) < 0.0;
        let (left, left_idx, right, right_idx) = if b_is_left {
            (body_b, body_b_idx, body_a, body_a_idx)
        } else {
            (body_a, body_a_idx, body_b, body_b_idx)
        };

        let depth = left.max_projection(axis) - right.min_projection(axis);
        if depth < 0.0 {
            return CollisionResult::separated(left_idx, right_idx, depth, axis);
        }
        if depth < min_depth {
            min_depth = depth;
            mtv_axis = axis;
            ordering = (left_idx, right_idx, b_is_left);
        }
    }

    let (left_idx, right_idx, b_is_left) = ordering;
    let (left, right) = if b_is_left { (body_b, body_a) } else { (body_a, body_b) };

    match resolve_contact(left, right) {
        Some(contact_point) => CollisionResult::contact(left_idx, right_idx, min_depth, mtv_axis, contact_point),
        None => {
            warn!(left = left_idx, right = right_idx, depth = min_depth, "collision retracted: empty intersection");
            CollisionResult::retracted(left_idx, right_idx, min_depth, mtv_axis)
        }
    }
}

/// Pure narrow-phase test between two bodies; indices in the result are 0 for
/// `a` and 1 for `b`.
pub fn test_collision(a: &RigidBody, b: &RigidBody) -> CollisionResult {
    collide(a, 0, b, 1)
}

/// Narrow-phase test between two bodies of an arena.
pub fn test_collision_at(bodies: &[RigidBody], a: usize, b: usize) -> Result<CollisionResult, PhysicsError> {
    let len = bodies.len();
    let body_a = bodies.get(a).ok_or(PhysicsError::BodyIndexOutOfRange { index: a, len })?;
    let body_b = bodies.get(b).ok_or(PhysicsError::BodyIndexOutOfRange { index: b, len })?;
    Ok(collide(body_a, a, body_b, b))
}
