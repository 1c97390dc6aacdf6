//! Configuration errors

/// Errors raised when a rig configuration breaks its invariants.
///
/// These are only produced at construction time; per-frame updates never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("smoothing time must be positive, got {0}")]
    NonPositiveSmoothingTime(f32),

    #[error("{name} must not be negative, got {value}")]
    NegativeDistance { name: &'static str, value: f32 },

    #[error("max speed must be positive when set, got {0}")]
    NonPositiveMaxSpeed(f32),

    #[error("turn speed must not be negative, got {0}")]
    NegativeTurnSpeed(f32),

    #[error("direction damp time must not be negative, got {0}")]
    NegativeDampTime(f32),

    #[error("max delta time must be positive, got {0}")]
    NonPositiveMaxDelta(f32),

    #[error("time scale must not be negative, got {0}")]
    NegativeTimeScale(f32),

    #[error("{0} must be finite")]
    NonFinite(&'static str),
}
