pub mod config;

pub use config::{ForceParams, SimulationConfig};
