//! Channel error types

use thiserror::Error;

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    /// Variance that is negative, NaN or infinite
    #[error("Noise variance must be non-negative and finite, got {0}")]
    InvalidVariance(f64),
}
