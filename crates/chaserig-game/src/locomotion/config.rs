//! Locomotion configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Locomotion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Scale applied to the normalized turn angle
    pub turn_speed: f32,
    /// Damp time the animation layer uses when blending direction
    pub direction_damp_time: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            turn_speed: 5.0,
            direction_damp_time: 0.25,
        }
    }
}

impl LocomotionConfig {
    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.turn_speed.is_finite() {
            return Err(ConfigError::NonFinite("turn_speed"));
        }
        if !self.direction_damp_time.is_finite() {
            return Err(ConfigError::NonFinite("direction_damp_time"));
        }
        if self.turn_speed < 0.0 {
            return Err(ConfigError::NegativeTurnSpeed(self.turn_speed));
        }
        if self.direction_damp_time < 0.0 {
            return Err(ConfigError::NegativeDampTime(self.direction_damp_time));
        }
        Ok(())
    }
}
