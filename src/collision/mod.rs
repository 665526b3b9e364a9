pub mod aabb;
pub mod contact;
pub mod detection;
pub mod manifold;

// Re-export key types
pub use aabb::{overlaps, AABB};
pub use contact::resolve_contact;
pub use detection::{circle_depth, collide, point_in_polygon, test_collision, test_collision_at, unique_axes};
pub use manifold::CollisionResult;
