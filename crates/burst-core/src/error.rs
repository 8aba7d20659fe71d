use thiserror::Error;

/// Errors raised while building particles from a [`MotionConfig`](crate::MotionConfig).
///
/// Evaluation never fails; everything is checked once, up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl MotionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        MotionError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
