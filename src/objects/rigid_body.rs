use tracing::debug;

use crate::collision::AABB;
use crate::error::PhysicsError;
use crate::math::{Transform, Vec2};
use crate::shapes::{Edge, Polygon};

/// Offsets between the supplied outline and its centroid below this are not logged.
const RECENTER_LOG_THRESHOLD: f64 = 1e-6;

/// Directional thrust driven by an input device. Each active direction adds
/// `accel * mass` along its axis, so the resulting acceleration does not
/// depend on the body's size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThrustControl {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Acceleration produced by a single active direction.
    pub accel: f64,
}

impl ThrustControl {
    pub fn new(accel: f64) -> Self {
        Self {
            accel,
            ..Self::default()
        }
    }

    /// Net force for a body of the given mass.
    pub fn force(&self, mass: f64) -> Vec2 {
        let magnitude = self.accel * mass;
        let mut force = Vec2::ZERO;
        if self.up {
            force.y += magnitude;
        }
        if self.down {
            force.y -= magnitude;
        }
        if self.right {
            force.x += magnitude;
        }
        if self.left {
            force.x -= magnitude;
        }
        force
    }
}

/// External force generator attached to a body, evaluated once per substep
/// right before integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceHook {
    /// The same force (through the centroid) and torque every substep.
    Constant { force: Vec2, torque: f64 },
    Thrust(ThrustControl),
}

impl ForceHook {
    /// Force and torque this hook contributes to a body of the given mass.
    pub fn evaluate(&self, mass: f64) -> (Vec2, f64) {
        match self {
            ForceHook::Constant { force, torque } => (*force, *torque),
            ForceHook::Thrust(control) => (control.force(mass), 0.0),
        }
    }
}

/// A convex polygon body with penalty-contact dynamics.
///
/// The local outline is stored relative to the centroid; `transform.position`
/// is the world-space centroid. World points, edges, outward normals and the
/// bounding box are derived from the transform and are refreshed by
/// [`RigidBody::refresh_geometry`] (the integrator calls it every substep).
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Geometry
    polygon: Polygon,
    transform: Transform,
    points: Vec<Vec2>,
    edges: Vec<Edge>,
    normals: Vec<Vec2>,
    aabb: AABB,

    // Physical properties
    density: f64,
    area: f64,
    mass: f64,
    inertia: f64,
    radius: f64,

    // Kinetic state
    pub linear_velocity: Vec2,
    pub linear_acceleration: Vec2,
    pub angular_velocity: f64, // Radians per second
    pub angular_acceleration: f64,

    // Accumulators for forces/torques applied during a substep
    pub force: Vec2,
    pub torque: f64,

    /// Skip translational integration.
    pub immovable: bool,
    /// Skip rotational integration.
    pub imrotatable: bool,
    pub force_hook: Option<ForceHook>,
}

/// Builds a body from its outline. See [`RigidBody::new`].
pub fn make_body(
    position: Vec2,
    vertices: Vec<Vec2>,
    density: f64,
    immovable: bool,
    imrotatable: bool,
) -> Result<RigidBody, PhysicsError> {
    RigidBody::new(position, vertices, density, immovable, imrotatable)
}

impl RigidBody {
    /// Creates a body whose outline is `vertices` (counter-clockwise) placed
    /// relative to `position`.
    ///
    /// The outline is re-centred on its centroid, so the body's centroid ends
    /// up at `position + centroid(vertices)` and the world-space outline is
    /// exactly `position + vertices`.
    pub fn new(
        position: Vec2,
        vertices: Vec<Vec2>,
        density: f64,
        immovable: bool,
        imrotatable: bool,
    ) -> Result<Self, PhysicsError> {
        let polygon = Polygon::new(vertices)?;
        Self::from_polygon(position, &polygon, density, immovable, imrotatable)
    }

    pub fn from_polygon(
        position: Vec2,
        polygon: &Polygon,
        density: f64,
        immovable: bool,
        imrotatable: bool,
    ) -> Result<Self, PhysicsError> {
        if !position.is_finite() || !density.is_finite() {
            return Err(PhysicsError::NonFiniteInput);
        }
        if density <= 0.0 {
            return Err(PhysicsError::InvalidDensity { density });
        }

        let (local, offset) = polygon.recentered();
        if offset.magnitude() > RECENTER_LOG_THRESHOLD {
            debug!(?offset, "outline centroid is not at the local origin; re-centring");
        }

        let area = local.area();
        let mass = density * area;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::DegenerateArea { area });
        }
        let inertia = mass * local.inertia_per_mass();
        if !(inertia.is_finite() && inertia > 0.0) {
            return Err(PhysicsError::DegenerateInertia { inertia });
        }
        let radius = local.mean_radius();

        let n = local.len();
        let mut body = Self {
            polygon: local,
            transform: Transform::new(position + offset, 0.0),
            points: vec![Vec2::ZERO; n],
            edges: vec![Edge::default(); n],
            normals: vec![Vec2::ZERO; n],
            aabb: AABB::new(Vec2::ZERO, Vec2::ZERO),
            density,
            area,
            mass,
            inertia,
            radius,
            linear_velocity: Vec2::ZERO,
            linear_acceleration: Vec2::ZERO,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            immovable,
            imrotatable,
            force_hook: None,
        };
        body.refresh_geometry();
        Ok(body)
    }

    /// Axis-aligned box of the given size centred on `position`.
    pub fn rect(position: Vec2, width: f64, height: f64, density: f64) -> Result<Self, PhysicsError> {
        Self::from_polygon(position, &Polygon::rect(width, height)?, density, false, false)
    }

    /// Regular polygon centred on `position`.
    pub fn regular(position: Vec2, sides: usize, size: f64, density: f64) -> Result<Self, PhysicsError> {
        Self::from_polygon(position, &Polygon::regular(sides, size)?, density, false, false)
    }

    /// Marks the body as both immovable and imrotatable.
    pub fn into_static(mut self) -> Self {
        self.immovable = true;
        self.imrotatable = true;
        self
    }

    pub fn with_force_hook(mut self, hook: ForceHook) -> Self {
        self.force_hook = Some(hook);
        self
    }

    /// Recomputes world points, edges, outward normals and the bounding box
    /// from the current position and rotation.
    pub fn refresh_geometry(&mut self) {
        let n = self.points.len();
        for (point, &local) in self.points.iter_mut().zip(self.polygon.vertices()) {
            *point = self.transform.apply(local);
        }
        for i in 0..n {
            let edge = Edge::new(self.points[i], self.points[(i + 1) % n]);
            self.edges[i] = edge;
            self.normals[i] = edge.outward_normal();
        }
        if let Some(aabb) = AABB::from_points(&self.points) {
            self.aabb = aabb;
        }
    }

    /// Minimum and maximum projection of the world points onto `direction`.
    pub fn support(&self, direction: Vec2) -> (f64, f64) {
        let mut min_proj = f64::INFINITY;
        let mut max_proj = f64::NEG_INFINITY;
        for point in &self.points {
            let projection = point.dot(direction);
            min_proj = min_proj.min(projection);
            max_proj = max_proj.max(projection);
        }
        (min_proj, max_proj)
    }

    pub fn max_projection(&self, direction: Vec2) -> f64 {
        self.support(direction).1
    }

    pub fn min_projection(&self, direction: Vec2) -> f64 {
        self.support(direction).0
    }

    /// Width of the body measured along `direction`.
    pub fn extent_along(&self, direction: Vec2) -> f64 {
        let (min_proj, max_proj) = self.support(direction);
        max_proj - min_proj
    }

    /// Velocity of the material point of this body currently at `point_world`.
    pub fn point_velocity(&self, point_world: Vec2) -> Vec2 {
        let arm = point_world - self.centroid();
        self.linear_velocity + arm.orthogonal() * self.angular_velocity
    }

    /// Applies a force at the centroid.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Applies a force at a specific point (in world coordinates).
    /// This generates both linear force and torque.
    pub fn apply_force_at_point(&mut self, force: Vec2, point_world: Vec2) {
        self.force += force;
        let arm = point_world - self.centroid();
        self.torque += arm.cross(force);
    }

    pub fn apply_torque(&mut self, torque: f64) {
        self.torque += torque;
    }

    /// Called by the integrator after the accumulators have been consumed.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }

    /// Moves the centroid and refreshes the derived geometry.
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
        self.refresh_geometry();
    }

    /// Sets the rotation angle and refreshes the derived geometry.
    pub fn set_rotation(&mut self, angle: f64) {
        self.transform.set_angle(angle);
        self.refresh_geometry();
    }

    /// Both flags set: the body never changes state but still collides.
    pub fn is_fixed(&self) -> bool {
        self.immovable && self.imrotatable
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub(crate) fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// World-space centroid (the body's position).
    pub fn centroid(&self) -> Vec2 {
        self.transform.position
    }

    pub fn rotation_angle(&self) -> f64 {
        self.transform.angle()
    }

    /// Local outline, relative to the centroid.
    pub fn local_vertices(&self) -> &[Vec2] {
        self.polygon.vertices()
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn world_points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outward unit normals, one per edge.
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    pub fn aabb(&self) -> &AABB {
        &self.aabb
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Rotational-inertia analog ("moofin") relating torque to angular acceleration.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Mean vertex distance from the centroid; drives rotational drag.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
