pub mod rigid_body;

pub use rigid_body::{make_body, ForceHook, RigidBody, ThrustControl};
