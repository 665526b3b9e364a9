use crate::objects::rigid_body::RigidBody;

/// Integrates the rigid body's state forward in time using Semi-Implicit Euler.
///
/// The body's force hook (if any) is evaluated first. Translation is skipped
/// for immovable bodies and rotation for imrotatable ones. The accumulators
/// are always cleared and the world geometry is refreshed afterwards.
pub fn integrate(body: &mut RigidBody, dt: f64) {
    if let Some(hook) = body.force_hook {
        let (force, torque) = hook.evaluate(body.mass());
        body.force += force;
        body.torque += torque;
    }

    // --- Linear Motion --- //
    if !body.immovable {
        body.linear_acceleration = body.force / body.mass();
        body.linear_velocity += body.linear_acceleration * dt;
        let velocity = body.linear_velocity;
        body.transform_mut().position += velocity * dt;
    }

    // --- Angular Motion --- //
    if !body.imrotatable {
        body.angular_acceleration = body.torque / body.inertia();
        body.angular_velocity += body.angular_acceleration * dt;
        let angle = body.rotation_angle() + body.angular_velocity * dt;
        body.transform_mut().set_angle(angle);
    }

    // Clear force/torque accumulators for the next substep
    body.clear_accumulators();
    body.refresh_geometry();
}
