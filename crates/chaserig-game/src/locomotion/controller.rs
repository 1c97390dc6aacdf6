//! Per-frame locomotion driver
//!
//! Samples input, resolves it against the camera, and forwards the result to
//! the animation layer. Run after the camera has updated for the frame.

use glam::Vec3;
use tracing::trace;

use crate::animation::AnimationSink;
use crate::input::InputSource;

use super::{LocomotionOutput, LocomotionResolver};

/// Animation parameter receiving the stick speed
pub const SPEED_PARAM: &str = "Speed";
/// Animation parameter receiving the turn direction
pub const DIRECTION_PARAM: &str = "Direction";

/// Drives the animation layer from stick input
#[derive(Debug, Clone, Default)]
pub struct LocomotionController {
    resolver: LocomotionResolver,
}

impl LocomotionController {
    pub fn new(resolver: LocomotionResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &LocomotionResolver {
        &self.resolver
    }

    /// Update locomotion for one frame.
    ///
    /// Speed is written as-is; direction goes through the sink's damped
    /// setter with the configured damp time. Without a sink the output is
    /// still computed and returned.
    pub fn update(
        &self,
        input: &mut dyn InputSource,
        subject_forward: Vec3,
        camera_forward: Vec3,
        sink: Option<&mut dyn AnimationSink>,
        dt: f32,
    ) -> LocomotionOutput {
        let sample = input.sample();
        let output = self.resolver.resolve(sample, subject_forward, camera_forward);
        trace!(
            "Locomotion input ({:.2}, {:.2}) -> direction {:.3}, speed {:.3}",
            sample.horizontal,
            sample.vertical,
            output.direction,
            output.speed
        );

        if let Some(sink) = sink {
            sink.set_float(SPEED_PARAM, output.speed);
            sink.set_float_damped(
                DIRECTION_PARAM,
                output.direction,
                self.resolver.config().direction_damp_time,
                dt,
            );
        }

        output
    }
}
