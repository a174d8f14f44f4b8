use thiserror::Error;

/// Precondition failures of the noise pipeline.
///
/// Every variant is raised before any output buffer is allocated, so a caller
/// never observes a partially computed field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    #[error("invalid field dimensions {width}×{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error(
        "degenerate noise parameters: octave_count={octave_count} (needs ≥ 2), \
         persistence={persistence} (needs 0 < p < 1)"
    )]
    DegenerateParameters { octave_count: u32, persistence: f32 },

    #[error("field mismatch: {reason}")]
    FieldMismatch { reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NoiseError>;
