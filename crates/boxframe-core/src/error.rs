//! Error types for boxframe-core.

use thiserror::Error;

/// Errors raised while building layout values.
///
/// Size constraints never produce errors; renderables clamp instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A required argument was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
