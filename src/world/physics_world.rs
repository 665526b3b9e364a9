use tracing::{trace, trace_span};

use crate::{
    collision::{self, CollisionResult},
    common::SimulationConfig,
    error::PhysicsError,
    forces,
    integration::integrator,
    objects::rigid_body::RigidBody,
};

/// Diagnostics of one call to [`step`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub substeps: usize,
    pub substep_dt: f64,
    /// Pairs that passed the broad phase and went through SAT, summed over substeps.
    pub pairs_tested: usize,
    /// Pairs that produced a contact force, summed over substeps.
    pub contacts: usize,
    /// SAT overlaps dropped because no contact point could be found.
    pub retracted: usize,
}

/// Advances `bodies` by `frame_dt` with the default force model and no gravity.
///
/// The frame is split into `ceil(frame_dt / target_substep_dt)` equal
/// substeps, at most `max_substeps` of the default configuration. A zero
/// `frame_dt` does nothing.
pub fn step(bodies: &mut [RigidBody], frame_dt: f64, target_substep_dt: f64) -> Result<StepReport, PhysicsError> {
    let config = SimulationConfig {
        target_substep_dt,
        ..SimulationConfig::default()
    };
    step_with_config(bodies, frame_dt, &config)
}

/// Advances `bodies` by `frame_dt` using `config`.
pub fn step_with_config(
    bodies: &mut [RigidBody],
    frame_dt: f64,
    config: &SimulationConfig,
) -> Result<StepReport, PhysicsError> {
    let target = config.target_substep_dt;
    if !frame_dt.is_finite() || frame_dt < 0.0 || !target.is_finite() || target <= 0.0 {
        return Err(PhysicsError::InvalidTimeStep {
            frame_dt,
            target_substep_dt: target,
        });
    }
    config.validate()?;

    let _span = trace_span!("step", frame_dt, bodies = bodies.len()).entered();

    let mut report = StepReport::default();
    if frame_dt == 0.0 {
        return Ok(report);
    }

    let required = (frame_dt / target).ceil().max(1.0);
    if required > config.max_substeps as f64 {
        return Err(PhysicsError::InvalidTimeStep {
            frame_dt,
            target_substep_dt: target,
        });
    }
    let substeps = required as usize;
    let substep_dt = frame_dt / substeps as f64;
    report.substeps = substeps;
    report.substep_dt = substep_dt;

    for _ in 0..substeps {
        substep(bodies, substep_dt, config, &mut report);
    }

    trace!(
        substeps,
        substep_dt,
        pairs_tested = report.pairs_tested,
        contacts = report.contacts,
        retracted = report.retracted,
        "step complete"
    );
    Ok(report)
}

/// One pass of broad phase, narrow phase, contact forces, drag and integration.
fn substep(bodies: &mut [RigidBody], dt: f64, config: &SimulationConfig, report: &mut StepReport) {
    let count = bodies.len();
    for i in 0..count {
        for j in (i + 1)..count {
            // Get mutable references using split_at_mut to satisfy the borrow checker
            let (head, tail) = bodies.split_at_mut(j);
            let body_a = &mut head[i];
            let body_b = &mut tail[0];

            if body_a.is_fixed() && body_b.is_fixed() {
                continue;
            }
            if !collision::overlaps(body_a.aabb(), body_b.aabb()) {
                continue;
            }

            report.pairs_tested += 1;
            let result = collision::collide(body_a, i, body_b, j);
            if result.retracted {
                report.retracted += 1;
            }
            if !result.colliding {
                continue;
            }

            report.contacts += 1;
            let (left, right) = if result.left_idx == i {
                (body_a, body_b)
            } else {
                (body_b, body_a)
            };
            forces::apply_contact_force(left, right, &result, &config.forces);
        }
    }

    for body in bodies.iter_mut() {
        forces::apply_drag(body, &config.forces);
        forces::apply_gravity(body, config.gravity);
    }

    for body in bodies.iter_mut() {
        integrator::integrate(body, dt);
    }
}

/// Owns a collection of bodies and the configuration used to step them.
/// Bodies are addressed by the index returned from [`PhysicsWorld::add_body`].
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    pub bodies: Vec<RigidBody>,
    pub config: SimulationConfig,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            bodies: Vec::new(),
            config,
        })
    }

    /// Adds a rigid body to the world and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn body(&self, index: usize) -> Result<&RigidBody, PhysicsError> {
        let len = self.bodies.len();
        self.bodies.get(index).ok_or(PhysicsError::BodyIndexOutOfRange { index, len })
    }

    pub fn body_mut(&mut self, index: usize) -> Result<&mut RigidBody, PhysicsError> {
        let len = self.bodies.len();
        self.bodies.get_mut(index).ok_or(PhysicsError::BodyIndexOutOfRange { index, len })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Narrow-phase test between two bodies of the world, without side effects.
    pub fn test_collision(&self, a: usize, b: usize) -> Result<CollisionResult, PhysicsError> {
        collision::test_collision_at(&self.bodies, a, b)
    }

    /// Advances the simulation by `frame_dt` using the configured substep size.
    pub fn step(&mut self, frame_dt: f64) -> Result<StepReport, PhysicsError> {
        step_with_config(&mut self.bodies, frame_dt, &self.config)
    }
}
