pub mod collision;
pub mod common;
pub mod error;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{point_in_polygon, test_collision, CollisionResult, AABB};
pub use common::{ForceParams, SimulationConfig};
pub use error::PhysicsError;
pub use math::vec2::Vec2;
pub use objects::{make_body, ForceHook, RigidBody, ThrustControl};
pub use shapes::Polygon;
pub use world::{step, step_with_config, PhysicsWorld, StepReport};
