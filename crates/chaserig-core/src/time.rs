//! Frame time tracking
//!
//! The rig never owns its timing. The host feeds raw frame deltas into
//! [`GameTime`] and passes the resulting `delta_time` to each `update`.

use serde::{Deserialize, Serialize};

/// Configuration for frame time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many in-game seconds pass per real second
    pub time_scale: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Game time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether time is paused
    pub paused: bool,
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Update the game time with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        // Tolerates a negative or NaN max and a NaN delta
        self.unscaled_delta_time = raw_delta.max(0.0).min(self.config.max_delta_time.max(0.0));
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
    }

    /// Pause time
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_time() {
        let mut time = GameTime::default();
        time.update(0.016);

        assert!(time.delta_time > 0.0);
        assert_eq!(time.frame_count, 1);

        time.pause();
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.frame_count, 2);

        time.resume();
        time.update(0.016);
        assert!(time.delta_time > 0.0);
    }

    #[test]
    fn test_delta_clamped_and_scaled() {
        let mut time = GameTime::default();
        time.update(5.0);
        assert_eq!(time.unscaled_delta_time, 0.25);

        time.set_time_scale(2.0);
        time.update(0.1);
        assert!((time.delta_time - 0.2).abs() < 1e-6);

        time.set_time_scale(-1.0);
        time.update(0.1);
        assert_eq!(time.delta_time, 0.0);
    }

    #[test]
    fn test_bad_max_delta_does_not_panic() {
        let mut time = GameTime::new(TimeConfig {
            time_scale: 1.0,
            max_delta_time: -0.1,
        });
        time.update(1.0 / 60.0);
        assert_eq!(time.delta_time, 0.0);

        let mut time = GameTime::default();
        time.update(f32::NAN);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.total_time, 0.0);
    }
}
