//! Errors surfaced to callers when building bodies or stepping the simulation.

/// Everything that can go wrong when constructing a body or running `step`.
///
/// Geometric degeneracies that show up *during* a step (parallel edges,
/// collinear contact regions, empty intersection sets) are handled locally and
/// never reach this type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
    #[error("vertices, position and density must be finite")]
    NonFiniteInput,
    #[error("density must be positive, got {density}")]
    InvalidDensity { density: f64 },
    #[error("edge {index} has zero length")]
    DegenerateEdge { index: usize },
    #[error("polygon area {area} is too small")]
    DegenerateArea { area: f64 },
    #[error("vertices must be ordered counter-clockwise")]
    ClockwiseWinding,
    #[error("edges {first} and {second} intersect; polygon is not simple")]
    SelfIntersecting { first: usize, second: usize },
    #[error("rotational inertia {inertia} is not usable")]
    DegenerateInertia { inertia: f64 },
    #[error("invalid time step: frame dt {frame_dt}, target substep dt {target_substep_dt}")]
    InvalidTimeStep { frame_dt: f64, target_substep_dt: f64 },
    #[error("body index {index} out of range for {len} bodies")]
    BodyIndexOutOfRange { index: usize, len: usize },
    #[error("invalid simulation parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
