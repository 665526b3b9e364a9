pub mod physics_world;

pub use physics_world::{step, step_with_config, PhysicsWorld, StepReport};
