//! Chaserig Core - Core types and utilities for the chase camera rig
//!
//! This crate provides the foundational types used by the rig:
//! - Mathematical primitives (re-exported from glam)
//! - Transform and pose types for entity positioning
//! - Critically-damped smoothing filters
//! - Frame time tracking

pub mod math;
pub mod time;
pub mod types;

pub use glam::{Quat, Vec3};
pub use math::{flatten_y, smooth_damp, smooth_damp_vec3};
pub use time::{GameTime, TimeConfig};
pub use types::{Color, EntityId, Pose, Transform};
