//! Debug geometry for the chase camera
//!
//! Nothing here feeds back into the camera. Hosts that can draw lines may
//! render these segments to see how the target position is built.

use chaserig_core::{Color, Pose};
use glam::Vec3;

use super::ChaseCamera;

/// A colored line segment in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

impl DebugLine {
    pub fn new(start: Vec3, end: Vec3, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Segment starting at `origin` and extending along `direction`
    pub fn ray(origin: Vec3, direction: Vec3, color: Color) -> Self {
        Self::new(origin, origin + direction, color)
    }
}

impl ChaseCamera {
    /// Debug segments for the current frame:
    /// elevation (red), trail behind the subject (blue), and the line from the
    /// subject to the camera's target position (magenta).
    pub fn debug_lines(&self, subject: &Pose) -> [DebugLine; 3] {
        let config = self.config();
        [
            DebugLine::ray(
                subject.position,
                Vec3::Y * config.elevation_distance,
                Color::RED,
            ),
            DebugLine::ray(
                subject.position,
                -subject.forward * config.trail_distance,
                Color::BLUE,
            ),
            DebugLine::new(subject.position, self.target_position(), Color::MAGENTA),
        ]
    }
}
