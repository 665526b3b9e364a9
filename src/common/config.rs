//! Tunable constants of the force model and the step loop.

use crate::error::PhysicsError;
use crate::math::Vec2;

/// Coefficients of the penalty contact model and the drag model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct ForceParams {
    /// Spring constant `k` of the contact force, per unit penetration depth.
    pub stiffness: f64,
    /// Damping constant `c`, per unit approach speed along the contact axis.
    pub damping: f64,
    /// Magnitude `mu` of the friction force opposing the relative contact velocity.
    pub friction: f64,
    /// Translational drag coefficient, scaled by the body's cross-section.
    pub linear_drag: f64,
    /// Rotational drag coefficient, scaled by the body's radius cubed.
    pub angular_drag: f64,
}

impl ForceParams {
    /// Rejects negative or non-finite coefficients.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("friction", self.friction),
            ("linear_drag", self.linear_drag),
            ("angular_drag", self.angular_drag),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PhysicsError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ForceParams {
    fn default() -> Self {
        ForceParams {
            stiffness: 10_000.0,
            damping: 80.0,
            friction: 0.5,
            linear_drag: 0.25,
            angular_drag: 0.15,
        }
    }
}

/// Configuration of a [`PhysicsWorld`](crate::world::PhysicsWorld).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct SimulationConfig {
    /// Upper bound on the length of one substep; a frame is split into
    /// `ceil(frame_dt / target_substep_dt)` equal substeps.
    pub target_substep_dt: f64,
    /// Frames needing more substeps than this are rejected by `step`.
    pub max_substeps: usize,
    /// Uniform acceleration applied to every movable body.
    pub gravity: Vec2,
    pub forces: ForceParams,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.target_substep_dt.is_finite() || self.target_substep_dt <= 0.0 {
            return Err(PhysicsError::InvalidParameter {
                name: "target_substep_dt",
                value: self.target_substep_dt,
            });
        }
        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidParameter {
                name: "max_substeps",
                value: 0.0,
            });
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::NonFiniteInput);
        }
        self.forces.validate()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            target_substep_dt: 1e-4,
            max_substeps: 1_000_000,
            gravity: Vec2::ZERO,
            forces: ForceParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_substep_dt, 1e-4);
        assert_eq!(config.gravity, Vec2::ZERO);
        assert_eq!(config.forces.stiffness, 10_000.0);
        assert_eq!(config.forces.damping, 80.0);
        assert_eq!(config.forces.friction, 0.5);
        assert_eq!(config.forces.linear_drag, 0.25);
        assert_eq!(config.forces.angular_drag, 0.15);
    }

    #[test]
    fn test_validate_rejects_bad_substep() {
        let mut config = SimulationConfig::default();
        config.target_substep_dt = 0.0;
        assert!(matches!(
            config.validate(),
            Err(PhysicsError::InvalidParameter { name: "target_substep_dt", .. })
        ));
        config.target_substep_dt = f64::NAN;
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            max_substeps: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PhysicsError::InvalidParameter { name: "max_substeps", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_coefficients() {
        let mut params = ForceParams::default();
        params.friction = -0.1;
        assert_eq!(
            params.validate(),
            Err(PhysicsError::InvalidParameter { name: "friction", value: -0.1 })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite_gravity() {
        let config = SimulationConfig {
            gravity: Vec2::new(0.0, f64::INFINITY),
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(PhysicsError::NonFiniteInput));
    }

    #[cfg(feature = "serde-types")]
    #[test]
    fn test_config_ron_round_trip() {
        let config = SimulationConfig {
            target_substep_dt: 5e-4,
            max_substeps: 500,
            gravity: Vec2::new(0.0, -9.81),
            forces: ForceParams {
                friction: 0.3,
                ..ForceParams::default()
            },
        };
        let text = ron::to_string(&config).expect("serialize");
        let back: SimulationConfig = ron::from_str(&text).expect("deserialize");
        assert_eq!(back, config);
    }

    #[cfg(feature = "serde-types")]
    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: SimulationConfig = ron::from_str("(gravity: (x: 0.0, y: -1.0))").expect("deserialize");
        assert_eq!(config.gravity, Vec2::new(0.0, -1.0));
        assert_eq!(config.target_substep_dt, 1e-4);
        assert_eq!(config.max_substeps, 1_000_000);
        assert_eq!(config.forces, ForceParams::default());
    }
}
