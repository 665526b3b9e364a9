use crate::common::ForceParams;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Accumulates translational and rotational drag.
///
/// Translational drag is `-linear_drag * w * v`, where `w` is the body's width
/// across its direction of travel. Rotational drag is
/// `-(2/3) * angular_drag * omega * r³` with `r` the mean vertex radius.
pub fn apply_drag(body: &mut RigidBody, params: &ForceParams) {
    let velocity = body.linear_velocity;
    if velocity.magnitude_squared() != 0.0 {
        let cross_section = body.extent_along(velocity.normalize().orthogonal());
        body.force += velocity * (-params.linear_drag * cross_section);
    }

    let radius = body.radius();
    body.torque += -(2.0 / 3.0) * params.angular_drag * body.angular_velocity * radius * radius * radius;
}

/// Accumulates `gravity * mass` on bodies that can translate.
pub fn apply_gravity(body: &mut RigidBody, gravity: Vec2) {
    if body.immovable {
        return;
    }
    let weight = gravity * body.mass();
    body.force += weight;
}
