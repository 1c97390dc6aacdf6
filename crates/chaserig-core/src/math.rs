//! Smoothing filters and small vector helpers
//!
//! The smooth-damp filters are critically-damped springs. `omega = 2 / smooth_time`
//! and the decay term `exp(-omega * dt)` is replaced by its usual cubic
//! approximation, which stays stable for any step size.

use glam::Vec3;

/// Smallest smoothing time accepted by the filters
const MIN_SMOOTH_TIME: f32 = 1.0e-4;

/// Project a vector onto the horizontal plane (zero its Y component)
#[inline]
pub fn flatten_y(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

#[inline]
fn decay(omega: f32, dt: f32) -> f32 {
    let x = omega * dt;
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Move a scalar toward `target` with a critically-damped spring.
///
/// Returns the new value and the new velocity. A `dt` that is zero, negative or
/// NaN returns the inputs untouched; a step long enough to settle the spring
/// returns the target at rest. `max_speed` caps how far the value may be from the
/// goal it is chasing in one smoothing period.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: f32,
    smooth_time: f32,
    max_speed: Option<f32>,
    dt: f32,
) -> (f32, f32) {
    if dt.is_nan() || dt <= 0.0 {
        return (current, velocity);
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = decay(omega, dt);
    if decay == 0.0 {
        return (target, 0.0);
    }

    let mut change = current - target;
    if let Some(max_speed) = max_speed {
        let max_change = max_speed * smooth_time;
        change = change.clamp(-max_change, max_change);
    }
    let goal = current - change;

    let temp = (velocity + omega * change) * dt;
    let mut new_velocity = (velocity - omega * temp) * decay;
    let mut output = goal + (change + temp) * decay;

    // Never pass the original target
    if (target - current > 0.0) == (output > target) {
        output = target;
        new_velocity = 0.0;
    }

    if !output.is_finite() || !new_velocity.is_finite() {
        return (target, 0.0);
    }

    (output, new_velocity)
}

/// Move a point toward `target` with a critically-damped spring.
///
/// Vector form of [`smooth_damp`]; the overshoot clamp compares directions so
/// the result never lands past the target along the approach line.
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: Vec3,
    smooth_time: f32,
    max_speed: Option<f32>,
    dt: f32,
) -> (Vec3, Vec3) {
    if dt.is_nan() || dt <= 0.0 {
        return (current, velocity);
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = decay(omega, dt);
    if decay == 0.0 {
        return (target, Vec3::ZERO);
    }

    let mut change = current - target;
    if let Some(max_speed) = max_speed {
        change = change.clamp_length_max(max_speed * smooth_time);
    }
    let goal = current - change;

    let temp = (velocity + omega * change) * dt;
    let mut new_velocity = (velocity - omega * temp) * decay;
    let mut output = goal + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        output = target;
        new_velocity = Vec3::ZERO;
    }

    if !output.is_finite() || !new_velocity.is_finite() {
        return (target, Vec3::ZERO);
    }

    (output, new_velocity)
}
