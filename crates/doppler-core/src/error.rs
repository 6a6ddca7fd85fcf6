use thiserror::Error;

/// Errors raised while validating simulation constants or layout.
///
/// Runtime inputs (velocities, elapsed time) are never rejected; only the
/// values fixed at construction are checked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("trace capacity must be at least 1")]
    EmptyTrace,

    #[error("chart rectangle must have positive size, got {width}x{height}")]
    DegenerateChart { width: f32, height: f32 },
}
