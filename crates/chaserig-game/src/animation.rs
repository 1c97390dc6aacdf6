//! Animation parameter sink
//!
//! Locomotion writes its outputs as named float parameters. Blending and the
//! state machine behind them belong to the host's animation layer.

use std::collections::HashMap;

use chaserig_core::smooth_damp;

/// Receives named float parameters each frame
pub trait AnimationSink {
    /// Set a parameter immediately
    fn set_float(&mut self, name: &str, value: f32);

    /// Move a parameter toward `value`, settling over roughly `damp_time` seconds
    fn set_float_damped(&mut self, name: &str, value: f32, damp_time: f32, dt: f32);
}

#[derive(Debug, Clone, Copy, Default)]
struct AnimatorFloat {
    value: f32,
    velocity: f32,
}

/// In-memory parameter table with damped updates
#[derive(Debug, Clone, Default)]
pub struct AnimatorParameters {
    floats: HashMap<String, AnimatorFloat>,
}

impl AnimatorParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a parameter
    pub fn get(&self, name: &str) -> Option<f32> {
        self.floats.get(name).map(|f| f.value)
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(
            name.to_string(),
            AnimatorFloat {
                value,
                velocity: 0.0,
            },
        );
    }

    fn set_float_damped(&mut self, name: &str, value: f32, damp_time: f32, dt: f32) {
        if damp_time <= 0.0 {
            self.set_float(name, value);
            return;
        }

        let param = self.floats.entry(name.to_string()).or_default();
        let (new_value, velocity) =
            smooth_damp(param.value, value, param.velocity, damp_time, None, dt);
        param.value = new_value;
        param.velocity = velocity;
    }
}
