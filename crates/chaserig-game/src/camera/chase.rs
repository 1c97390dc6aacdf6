//! Chase camera that trails a subject and keeps it in view

use chaserig_core::{flatten_y, smooth_damp_vec3, EntityId, Pose, Transform};
use glam::{Quat, Vec3};
use tracing::{debug, info, trace, warn};

use crate::error::ConfigError;
use crate::subject::SubjectLocator;

use super::CameraConfig;

/// Mutable camera state carried between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Current camera position
    pub position: Vec3,
    /// Current camera rotation
    pub rotation: Quat,
    /// Velocity of the smoothing filter
    pub velocity: Vec3,
    /// Target position computed on the last bound update
    pub target_position: Vec3,
    /// Last known-good horizontal direction from camera to aim point
    pub look_direction: Vec3,
}

impl CameraState {
    fn from_transform(transform: &Transform) -> Self {
        let look_direction = flatten_y(transform.forward())
            .try_normalize()
            .unwrap_or(Vec3::Z);

        Self {
            position: transform.position,
            rotation: transform.rotation,
            velocity: Vec3::ZERO,
            target_position: transform.position,
            look_direction,
        }
    }
}

/// Camera that follows a tagged subject from behind and above
pub struct ChaseCamera {
    config: CameraConfig,
    state: CameraState,
    subject: Option<EntityId>,
}

impl ChaseCamera {
    /// Create a chase camera starting at `initial`.
    ///
    /// The camera starts unbound; call [`ChaseCamera::bind_subject`] or let the
    /// first `update` find the subject.
    pub fn new(config: CameraConfig, initial: Transform) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: CameraState::from_transform(&initial),
            subject: None,
        })
    }

    /// Get the validated configuration
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Get the full per-frame state
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Get the camera's current world position
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Get the smoothing filter velocity
    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    /// Get the camera's current rotation
    pub fn rotation(&self) -> Quat {
        self.state.rotation
    }

    /// Get the camera's forward direction
    pub fn forward(&self) -> Vec3 {
        self.state.rotation * Vec3::Z
    }

    /// Position the camera was heading for on the last update
    pub fn target_position(&self) -> Vec3 {
        self.state.target_position
    }

    /// Horizontal direction from the camera toward the aim point
    pub fn look_direction(&self) -> Vec3 {
        self.state.look_direction
    }

    /// Camera transform for the renderer
    pub fn transform(&self) -> Transform {
        Transform::from_position_rotation(self.state.position, self.state.rotation)
    }

    /// Get the entity being followed, if bound
    pub fn subject(&self) -> Option<EntityId> {
        self.subject
    }

    /// Check if the camera is following a subject
    pub fn is_bound(&self) -> bool {
        self.subject.is_some()
    }

    /// Look up the tagged subject and follow it.
    ///
    /// Returns `false` if no entity carries the tag. The camera then stays
    /// unbound and `update` keeps retrying the lookup.
    pub fn bind_subject(&mut self, locator: &dyn SubjectLocator) -> bool {
        match locator.find_tagged(&self.config.subject_tag) {
            Some(id) => {
                info!("Chase camera bound to '{}' ({:?})", self.config.subject_tag, id);
                self.subject = Some(id);
                true
            }
            None => {
                warn!(
                    "No entity tagged '{}' found, camera will retry",
                    self.config.subject_tag
                );
                false
            }
        }
    }

    /// Stop following the current subject
    pub fn unbind(&mut self) {
        self.subject = None;
    }

    /// Pose of the bound subject, binding lazily if needed
    fn subject_pose(&mut self, locator: &dyn SubjectLocator) -> Option<Pose> {
        let id = match self.subject {
            Some(id) => id,
            None => match locator.find_tagged(&self.config.subject_tag) {
                Some(id) => {
                    info!("Chase camera bound to '{}' ({:?})", self.config.subject_tag, id);
                    self.subject = Some(id);
                    id
                }
                None => {
                    trace!("Chase camera has no subject, skipping frame");
                    return None;
                }
            },
        };

        let pose = locator.pose(id);
        if pose.is_none() {
            warn!("Chase camera subject {:?} disappeared, unbinding", id);
            self.subject = None;
        }
        pose
    }

    /// Update the camera (call each frame, before locomotion)
    pub fn update(&mut self, locator: &dyn SubjectLocator, dt: f32) {
        let Some(subject) = self.subject_pose(locator) else {
            return;
        };

        let aim_point = subject.position + self.config.look_offset;

        // Keep the previous direction when the camera sits on the aim axis
        match flatten_y(aim_point - self.state.position).try_normalize() {
            Some(direction) => self.state.look_direction = direction,
            None => debug!("Camera directly above aim point, keeping look direction"),
        }

        let target_position = aim_point + subject.up * self.config.elevation_distance
            - self.state.look_direction * self.config.trail_distance;
        self.state.target_position = target_position;

        let (position, velocity) = smooth_damp_vec3(
            self.state.position,
            target_position,
            self.state.velocity,
            self.config.smoothing_time,
            self.config.max_speed,
            dt,
        );
        self.state.position = position;
        self.state.velocity = velocity;

        let mut transform = self.transform();
        if transform.look_at(subject.position, Vec3::Y) {
            self.state.rotation = transform.rotation;
        } else {
            debug!("Camera cannot face subject this frame, keeping rotation");
        }
    }
}
