//! Camera configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Chase camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Horizontal distance kept behind the subject
    pub trail_distance: f32,
    /// Height above the subject (along the subject's up axis)
    pub elevation_distance: f32,
    /// Approximate time to catch up with the target position, in seconds
    pub smoothing_time: f32,
    /// Offset added to the subject position before aiming
    pub look_offset: Vec3,
    /// Upper bound on follow speed (None = unbounded)
    pub max_speed: Option<f32>,
    /// Tag of the entity to follow
    pub subject_tag: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            trail_distance: 5.0,
            elevation_distance: 5.0,
            smoothing_time: 0.1,
            look_offset: Vec3::new(0.0, 1.5, 0.0),
            max_speed: None,
            subject_tag: "Player".to_string(),
        }
    }
}

impl CameraConfig {
    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("trail_distance", self.trail_distance),
            ("elevation_distance", self.elevation_distance),
            ("smoothing_time", self.smoothing_time),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if !self.look_offset.is_finite() {
            return Err(ConfigError::NonFinite("look_offset"));
        }

        if self.smoothing_time <= 0.0 {
            return Err(ConfigError::NonPositiveSmoothingTime(self.smoothing_time));
        }
        if self.trail_distance < 0.0 {
            return Err(ConfigError::NegativeDistance {
                name: "trail_distance",
                value: self.trail_distance,
            });
        }
        if self.elevation_distance < 0.0 {
            return Err(ConfigError::NegativeDistance {
                name: "elevation_distance",
                value: self.elevation_distance,
            });
        }
        if let Some(max_speed) = self.max_speed {
            if max_speed.is_nan() || max_speed <= 0.0 {
                return Err(ConfigError::NonPositiveMaxSpeed(max_speed));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CameraConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_smoothing_time() {
        let config = CameraConfig {
            smoothing_time: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveSmoothingTime(0.0))
        );

        let config = CameraConfig {
            smoothing_time: f32::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonFinite("smoothing_time")));
    }

    #[test]
    fn test_rejects_negative_distances() {
        let config = CameraConfig {
            elevation_distance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeDistance {
                name: "elevation_distance",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_max_speed() {
        let config = CameraConfig {
            max_speed: Some(0.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveMaxSpeed(0.0)));
    }
}
