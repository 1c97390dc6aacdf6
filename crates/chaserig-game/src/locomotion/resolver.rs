//! Camera-relative turn and speed resolution

use std::f32::consts::PI;

use chaserig_core::flatten_y;
use glam::{Quat, Vec3};

use crate::error::ConfigError;
use crate::input::InputSample;

use super::LocomotionConfig;

/// Squared length below which a vector has no usable direction
const DEGENERATE_LENGTH_SQUARED: f32 = 1.0e-12;

/// Values handed to the animation layer each frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionOutput {
    /// Signed turn intent in [-turn_speed, turn_speed]; positive turns right
    pub direction: f32,
    /// Squared magnitude of the stick input
    pub speed: f32,
}

/// Resolve stick input against the camera's facing.
///
/// The stick is rotated so that "forward" points away from the camera, then
/// compared with the subject's facing. The unsigned angle between the two is
/// normalized to [0, 1] and signed by which side of the subject the move
/// direction lies on: a cross product with `y >= 0` turns left (negative).
///
/// `speed` is the squared stick magnitude, not its length. When the stick is
/// centered, the subject has no facing, or the camera looks straight up or
/// down, `direction` is zero.
pub fn resolve(
    input: InputSample,
    subject_forward: Vec3,
    camera_forward: Vec3,
    turn_speed: f32,
) -> LocomotionOutput {
    let stick = Vec3::new(input.horizontal, 0.0, input.vertical);
    let speed = stick.length_squared();

    // Not renormalized: only its heading is used below
    let camera_flat = flatten_y(camera_forward);

    if speed <= DEGENERATE_LENGTH_SQUARED
        || subject_forward.length_squared() <= DEGENERATE_LENGTH_SQUARED
        || camera_flat.length_squared() <= DEGENERATE_LENGTH_SQUARED
    {
        return LocomotionOutput {
            direction: 0.0,
            speed,
        };
    }

    // Rotation taking +Z onto the camera heading; both are horizontal so it is a pure yaw
    let shift = Quat::from_rotation_y(camera_flat.x.atan2(camera_flat.z));
    let move_direction = shift * stick;

    let axis_sign = move_direction.cross(subject_forward);
    let angle = subject_forward.angle_between(move_direction);
    let signed_angle = if axis_sign.y >= 0.0 { -angle } else { angle };

    LocomotionOutput {
        direction: signed_angle / PI * turn_speed,
        speed,
    }
}

/// Resolver bound to a validated [`LocomotionConfig`]
#[derive(Debug, Clone, Default)]
pub struct LocomotionResolver {
    config: LocomotionConfig,
}

impl LocomotionResolver {
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Resolve input using the configured turn speed
    pub fn resolve(
        &self,
        input: InputSample,
        subject_forward: Vec3,
        camera_forward: Vec3,
    ) -> LocomotionOutput {
        resolve(input, subject_forward, camera_forward, self.config.turn_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_centered_stick_is_zero() {
        let cameras = [Vec3::Z, Vec3::new(1.0, -0.3, -2.0), Vec3::Y, Vec3::ZERO];
        let subjects = [Vec3::Z, -Vec3::X, Vec3::ZERO];

        for camera in cameras {
            for subject in subjects {
                let output = resolve(InputSample::ZERO, subject, camera, 5.0);
                assert_eq!(output.speed, 0.0);
                assert_eq!(output.direction, 0.0);
            }
        }
    }

    #[test]
    fn test_forward_aligned() {
        let output = resolve(InputSample::new(0.0, 1.0), Vec3::Z, Vec3::Z, 5.0);
        assert!(output.direction.abs() < EPSILON);
        assert_eq!(output.speed, 1.0);
    }

    #[test]
    fn test_hard_right() {
        let output = resolve(InputSample::new(1.0, 0.0), Vec3::Z, Vec3::Z, 5.0);
        assert!((output.direction - 2.5).abs() < EPSILON);
        assert_eq!(output.speed, 1.0);

        let output = resolve(InputSample::new(-1.0, 0.0), Vec3::Z, Vec3::Z, 5.0);
        assert!((output.direction + 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_straight_back_turns_left() {
        // Cross product is zero, which counts as the left side
        let output = resolve(InputSample::new(0.0, -1.0), Vec3::Z, Vec3::Z, 5.0);
        assert!((output.direction + 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_speed_is_squared_magnitude() {
        let output = resolve(InputSample::new(0.5, 0.5), Vec3::Z, Vec3::Z, 5.0);
        assert!((output.speed - 0.5).abs() < EPSILON);

        let output = resolve(InputSample::new(0.0, 0.5), Vec3::Z, Vec3::Z, 5.0);
        assert!((output.speed - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_camera_relative() {
        // Camera looking down +X: pushing forward moves along +X
        let output = resolve(InputSample::new(0.0, 1.0), Vec3::Z, Vec3::X, 5.0);
        assert!((output.direction - 2.5).abs() < EPSILON);

        // Camera and subject both facing -Z
        let output = resolve(InputSample::new(0.0, 1.0), -Vec3::Z, -Vec3::Z, 5.0);
        assert!(output.direction.abs() < 1e-2);

        // Camera looking down -Z: pushing right moves along -X
        let output = resolve(InputSample::new(1.0, 0.0), Vec3::X, -Vec3::Z, 5.0);
        assert!((output.direction.abs() - 5.0).abs() < 1e-2);
    }

    #[test]
    fn test_horizontal_sign_symmetry() {
        let camera = Vec3::new(1.0, -0.5, 1.0);
        let subject = Vec3::new(1.0, 0.0, 1.0).normalize();

        for (h, v) in [(0.5, 0.5), (1.0, 0.2), (0.3, -0.8), (0.1, 1.0)] {
            let right = resolve(InputSample::new(h, v), subject, camera, 5.0);
            let left = resolve(InputSample::new(-h, v), subject, camera, 5.0);
            assert!((right.direction + left.direction).abs() < EPSILON);
            assert!(right.direction > 0.0);
            assert_eq!(right.speed, left.speed);
        }
    }

    #[test]
    fn test_camera_pitch_does_not_scale_output() {
        let input = InputSample::new(0.6, 0.3);
        let level = resolve(input, Vec3::Z, Vec3::new(0.0, 0.0, 1.0), 5.0);
        let pitched = resolve(input, Vec3::Z, Vec3::new(0.0, -0.9, 0.1), 5.0);

        assert!((level.direction - pitched.direction).abs() < EPSILON);
        assert_eq!(level.speed, pitched.speed);
    }

    #[test]
    fn test_vertical_camera_gives_zero_direction() {
        let output = resolve(InputSample::new(1.0, 0.0), Vec3::Z, -Vec3::Y, 5.0);
        assert_eq!(output.direction, 0.0);
        assert_eq!(output.speed, 1.0);
    }

    #[test]
    fn test_direction_bounded_by_turn_speed() {
        for i in 0..16 {
            let angle = i as f32 / 16.0 * std::f32::consts::TAU;
            let input = InputSample::new(angle.sin(), angle.cos());
            let output = resolve(input, Vec3::new(0.3, 0.0, -1.0), Vec3::new(-0.2, 0.4, 0.7), 3.0);
            assert!(output.direction.abs() <= 3.0 + EPSILON);
        }
    }

    #[test]
    fn test_resolver_uses_config() {
        assert!(LocomotionResolver::new(LocomotionConfig {
            turn_speed: -2.0,
            ..Default::default()
        })
        .is_err());

        let resolver = LocomotionResolver::new(LocomotionConfig {
            turn_speed: 2.0,
            ..Default::default()
        })
        .expect("valid config");
        let output = resolver.resolve(InputSample::new(1.0, 0.0), Vec3::Z, Vec3::Z);
        assert!((output.direction - 1.0).abs() < EPSILON);
    }
}
