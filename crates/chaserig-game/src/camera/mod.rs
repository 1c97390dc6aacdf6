//! Camera system module
//!
//! Provides a third-person chase camera with critically-damped follow.

mod chase;
mod config;
mod debug;

pub use chase::{CameraState, ChaseCamera};
pub use config::CameraConfig;
pub use debug::DebugLine;
