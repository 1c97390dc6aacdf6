//! Core types used throughout the rig
//!
//! All transforms use a +Z forward, +Y up, +X right convention.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Squared length below which a direction is treated as degenerate
const DEGENERATE_LENGTH_SQUARED: f32 = 1.0e-12;

/// Unique identifier for entities in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Get the forward direction (positive Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Translate by the given offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Rotate by the given quaternion
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = (rotation * self.rotation).normalize();
    }

    /// Turn to face a target position.
    ///
    /// Returns `false` and keeps the current rotation when the target sits on
    /// the transform's position or lies straight along `up`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) -> bool {
        let to_target = target - self.position;
        if to_target.length_squared() <= DEGENERATE_LENGTH_SQUARED {
            return false;
        }
        let forward = to_target.normalize();

        let right = up.cross(forward);
        if right.length_squared() <= DEGENERATE_LENGTH_SQUARED {
            return false;
        }
        let right = right.normalize();
        let up = forward.cross(right);

        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize();
        true
    }

    /// Snapshot the position and facing of this transform
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            forward: self.forward(),
            up: self.up(),
        }
    }
}

/// Position and facing of an entity, as seen by the rig each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

impl Pose {
    /// Create a pose from explicit vectors
    pub fn new(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            position,
            forward,
            up,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Transform::default().pose()
    }
}

impl From<&Transform> for Pose {
    fn from(transform: &Transform) -> Self {
        transform.pose()
    }
}

/// RGBA color with floating point components (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    /// Create a color from RGB values (alpha = 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to an array [r, g, b, a]
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
