pub mod contact;
pub mod drag;

pub use contact::apply_contact_force;
pub use drag::{apply_drag, apply_gravity};
