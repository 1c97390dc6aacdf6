//! Directional input samples
//!
//! Polling devices is the host's job. The rig only sees one [`InputSample`]
//! per frame, pulled from whatever implements [`InputSource`].

use serde::{Deserialize, Serialize};

/// One frame of stick input, each axis conceptually in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    /// Left/right axis (right is positive)
    pub horizontal: f32,
    /// Back/forward axis (forward is positive)
    pub vertical: f32,
}

impl InputSample {
    pub const ZERO: InputSample = InputSample::new(0.0, 0.0);

    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Provides one input sample per frame
pub trait InputSource {
    fn sample(&mut self) -> InputSample;
}

/// A constant sample is a source that never changes
impl InputSource for InputSample {
    fn sample(&mut self) -> InputSample {
        *self
    }
}

/// Plays back a fixed sequence of samples, holding the last one
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    samples: Vec<InputSample>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(samples: Vec<InputSample>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Whether every scripted sample has been played
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.samples.len()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputSample {
        let sample = match self.samples.get(self.cursor) {
            Some(sample) => *sample,
            None => self.samples.last().copied().unwrap_or_default(),
        };
        self.cursor = (self.cursor + 1).min(self.samples.len());
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_holds_last() {
        let mut input = ScriptedInput::new(vec![
            InputSample::new(1.0, 0.0),
            InputSample::new(0.0, 1.0),
        ]);

        assert_eq!(input.sample(), InputSample::new(1.0, 0.0));
        assert!(!input.is_finished());
        assert_eq!(input.sample(), InputSample::new(0.0, 1.0));
        assert!(input.is_finished());
        assert_eq!(input.sample(), InputSample::new(0.0, 1.0));
    }

    #[test]
    fn test_empty_script_is_neutral() {
        let mut input = ScriptedInput::default();
        assert_eq!(input.sample(), InputSample::ZERO);
    }

    #[test]
    fn test_constant_source() {
        let mut input = InputSample::new(-0.5, 0.25);
        assert_eq!(input.sample(), InputSample::new(-0.5, 0.25));
        assert_eq!(input.sample(), InputSample::new(-0.5, 0.25));
    }
}
