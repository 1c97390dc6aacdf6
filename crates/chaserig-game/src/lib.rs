//! Chaserig Game - Chase camera and camera-relative locomotion
//!
//! Provides the smoothed chase camera, the locomotion resolver that turns
//! stick input into camera-relative turn and speed values, and the
//! collaborator traits the host implements to feed them.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod locomotion;
pub mod subject;

pub use animation::{AnimationSink, AnimatorParameters};
pub use camera::{CameraConfig, CameraState, ChaseCamera, DebugLine};
pub use error::ConfigError;
pub use input::{InputSample, InputSource, ScriptedInput};
pub use locomotion::{
    resolve, LocomotionConfig, LocomotionController, LocomotionOutput, LocomotionResolver,
};
pub use subject::{Scene, SubjectLocator};
