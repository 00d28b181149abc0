#![forbid(unsafe_code)]

//! Activation gate thresholds.
//!
//! The default gate turns an armed press into a live drag once the pointer
//! has travelled far enough vertically *and* the motion is predominantly
//! vertical. The direction test is evaluated as `|dy| > ratio * |dx|` rather
//! than `|dy / dx| > ratio`, so a perfectly vertical motion (`dx == 0`) passes
//! without dividing by zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default minimum vertical travel (pixels) before a drag activates.
pub const DEFAULT_MIN_VERTICAL_DISTANCE: f64 = 10.0;

/// Default minimum `|dy| / |dx|` ratio before a drag activates.
pub const DEFAULT_MIN_DIRECTION_RATIO: f64 = 2.0;

/// Thresholds for the default activation gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivationGateConfig {
    /// Vertical travel must strictly exceed this (default: 10px).
    pub min_vertical_distance: f64,
    /// `|dy|` must strictly exceed `|dx|` times this (default: 2).
    pub min_direction_ratio: f64,
}

impl Default for ActivationGateConfig {
    fn default() -> Self {
        Self {
            min_vertical_distance: DEFAULT_MIN_VERTICAL_DISTANCE,
            min_direction_ratio: DEFAULT_MIN_DIRECTION_RATIO,
        }
    }
}

impl ActivationGateConfig {
    /// Construct a validated gate configuration.
    pub fn new(min_vertical_distance: f64, min_direction_ratio: f64) -> Result<Self, ConfigError> {
        let config = Self {
            min_vertical_distance,
            min_direction_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both thresholds are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("min_vertical_distance", self.min_vertical_distance)?;
        check_threshold("min_direction_ratio", self.min_direction_ratio)
    }

    /// Whether a pointer displacement of `(dx, dy)` from the press origin
    /// should activate the drag.
    #[must_use]
    pub fn allows(&self, dx: f64, dy: f64) -> bool {
        let vertical = dy.abs();
        vertical > self.min_vertical_distance && vertical > self.min_direction_ratio * dx.abs()
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidThreshold { field, value });
    }
    Ok(())
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidThreshold { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { field, value } => {
                write!(f, "{field} must be finite and >= 0 (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ActivationGateConfig::default();
        assert_eq!(config.min_vertical_distance, 10.0);
        assert_eq!(config.min_direction_ratio, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn vertical_distance_must_strictly_exceed_threshold() {
        let config = ActivationGateConfig::default();
        assert!(!config.allows(0.0, 10.0));
        assert!(!config.allows(0.0, -10.0));
        assert!(config.allows(0.0, 10.5));
        assert!(config.allows(0.0, -11.0));
    }

    #[test]
    fn perfectly_vertical_motion_passes() {
        let config = ActivationGateConfig::default();
        assert!(config.allows(0.0, 45.0));
        assert!(config.allows(-0.0, -45.0));
    }

    #[test]
    fn shallow_motion_is_rejected() {
        let config = ActivationGateConfig::default();
        // |dy/dx| == 2 exactly does not pass.
        assert!(!config.allows(20.0, 40.0));
        assert!(config.allows(19.0, 40.0));
        assert!(!config.allows(-100.0, 40.0));
    }

    #[test]
    fn rejects_negative_and_non_finite_thresholds() {
        assert_eq!(
            ActivationGateConfig::new(-1.0, 2.0),
            Err(ConfigError::InvalidThreshold {
                field: "min_vertical_distance",
                value: -1.0,
            })
        );
        assert!(ActivationGateConfig::new(10.0, f64::INFINITY).is_err());
        assert!(ActivationGateConfig::new(f64::NAN, 2.0).is_err());
        assert!(ActivationGateConfig::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn error_display_names_field() {
        let err = ActivationGateConfig::new(3.0, -0.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "min_direction_ratio must be finite and >= 0 (got -0.5)"
        );
    }
}
