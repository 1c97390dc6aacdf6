//! Locomotion module
//!
//! Turns stick input into a camera-relative turn value and a speed value for
//! the character's animation layer.

mod config;
mod controller;
mod resolver;

pub use config::LocomotionConfig;
pub use controller::{LocomotionController, DIRECTION_PARAM, SPEED_PARAM};
pub use resolver::{resolve, LocomotionOutput, LocomotionResolver};
