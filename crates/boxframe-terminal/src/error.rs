//! Error types for boxframe-terminal.

use boxframe_core::LayoutError;
use thiserror::Error;

/// Errors that can occur while building or printing panels.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error from terminal output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid layout configuration.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
