use crate::collision::CollisionResult;
use crate::common::ForceParams;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Accumulates the penalty contact force for a colliding pair.
///
/// `left`/`right` must match `result.left_idx`/`result.right_idx`. The force
/// on `left` is a spring along the contact axis, a damper on the approach
/// speed and a friction term opposing the full relative contact velocity;
/// `right` receives the opposite force. Each body also gets the torque of its
/// force about its centroid. Returns the force applied to `left`.
pub fn apply_contact_force(
    left: &mut RigidBody,
    right: &mut RigidBody,
    result: &CollisionResult,
    params: &ForceParams,
) -> Vec2 {
    let axis = result.axis;
    let contact = result.contact_point;

    let arm_left = contact - left.centroid();
    let arm_right = contact - right.centroid();

    let relative_velocity = left.point_velocity(contact) - right.point_velocity(contact);
    let speed = relative_velocity.dot(axis);

    let spring = axis * (-params.stiffness * result.depth);
    let damping = axis * (-params.damping * speed);
    let mut force = spring + damping;

    let relative_speed_sq = relative_velocity.magnitude_squared();
    if relative_speed_sq != 0.0 {
        force += relative_velocity * (-params.friction * axis.magnitude() / relative_speed_sq.sqrt());
    }

    left.force += force;
    left.torque += arm_left.cross(force);
    right.force -= force;
    right.torque += arm_right.cross(-force);

    force
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::test_collision;
    const EPSILON: f64 = 1e-9;

    fn square(x: f64, y: f64) -> RigidBody {
        RigidBody::rect(Vec2::new(x, y), 1.0, 1.0, 1.0).expect("valid square")
    }

    #[test]
    fn test_contact_force_resting_pair_is_pure_spring() {
        let mut a = square(0.0, 0.0);
        let mut b = square(0.9, 0.0);
        let result = test_collision(&a, &b);
        assert!(result.colliding);

        let params = ForceParams::default();
        let force = apply_contact_force(&mut a, &mut b, &result, &params);

        // Spring pushes the left body back along -x with k * 0.1
        assert!((force.x - -1000.0).abs() < 1e-6);
        assert!(force.y.abs() < EPSILON);
        assert_eq!(b.force, -a.force);
        // Contact lies on the line between the centroids, so no torque
        assert!(a.torque.abs() < 1e-6);
        assert!(b.torque.abs() < 1e-6);
    }

    #[test]
    fn test_contact_force_damps_approach() {
        let mut a = square(0.0, 0.0);
        let mut b = square(0.9, 0.0);
        a.linear_velocity = Vec2::new(1.0, 0.0);
        let result = test_collision(&a, &b);

        let params = ForceParams {
            friction: 0.0,
            ..ForceParams::default()
        };
        let force = apply_contact_force(&mut a, &mut b, &result, &params);
        // Spring -1000 plus damping -80 * 1
        assert!((force.x - -1080.0).abs() < 1e-6);
    }

    #[test]
    fn test_contact_friction_opposes_normal_approach() {
        // Friction acts against the whole relative velocity, including the
        // component along the contact axis
        let mut a = square(0.0, 0.0);
        let mut b = square(0.9, 0.0);
        a.linear_velocity = Vec2::new(1.0, 0.0);
        let result = test_collision(&a, &b);

        let params = ForceParams {
            stiffness: 0.0,
            damping: 0.0,
            ..ForceParams::default()
        };
        let force = apply_contact_force(&mut a, &mut b, &result, &params);
        assert!((force.x - -0.5).abs() < EPSILON);
        assert!(force.y.abs() < EPSILON);
        assert!((b.force.x - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_contact_friction_opposes_sliding() {
        let mut a = square(0.0, 0.0);
        let mut b = square(0.9, 0.0);
        a.linear_velocity = Vec2::new(0.0, 2.0);
        let result = test_collision(&a, &b);

        let params = ForceParams {
            stiffness: 0.0,
            damping: 0.0,
            friction: 0.5,
            ..ForceParams::default()
        };
        let force = apply_contact_force(&mut a, &mut b, &result, &params);
        assert!(force.x.abs() < EPSILON);
        assert!((force.y - -0.5).abs() < EPSILON);
        // Friction at an offset contact point spins both bodies
        assert!(a.torque.abs() > 0.0);
        assert!((b.force.y - 0.5).abs() < EPSILON);
    }
}
