//! Error types for bitmap processing.

use thiserror::Error;

/// Errors raised by the transformation engine.
///
/// Every variant is reported before the first pixel is touched, so a failed
/// call never leaves a buffer partially transformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// An operation parameter is outside its legal domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// The buffer dimensions, stride or length are inconsistent.
    #[error("Invalid buffer shape: {0}")]
    BufferShape(String),

    /// An operation selector does not name a known transformation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl ProcessError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ProcessError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised by [`BoundedHistory`](crate::history::BoundedHistory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A history must be able to hold at least one item.
    #[error("History capacity must be at least 1")]
    ZeroCapacity,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
