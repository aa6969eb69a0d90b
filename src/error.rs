//! Error types for the taskfill CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::BlockError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for taskfill operations.
///
/// Each variant maps to a specific exit code (see [`exit_codes`]).
#[derive(Error, Debug)]
pub enum TaskfillError {
    /// User provided invalid arguments or the inputs leave nothing to do.
    #[error("{0}")]
    UserError(String),

    /// A document could not be read, or the result could not be written back.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the operator's choice or writing the menu failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),

    /// Input ended before a section and task were chosen.
    #[error("selection aborted: input closed before a choice was made")]
    SelectionAborted,

    /// The template has no tagged block to replace (reported only in strict mode).
    #[error("template has no tagged block: {0}")]
    NoMatchingBlock(#[from] BlockError),
}

impl TaskfillError {
    /// Build an [`TaskfillError::Io`] for the given action and path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskfillError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskfillError::UserError(_) => exit_codes::USER_ERROR,
            TaskfillError::SelectionAborted => exit_codes::USER_ERROR,
            TaskfillError::Io { .. } => exit_codes::IO_FAILURE,
            TaskfillError::Terminal(_) => exit_codes::IO_FAILURE,
            TaskfillError::NoMatchingBlock(_) => exit_codes::TEMPLATE_MISMATCH,
        }
    }
}

/// Result type alias for taskfill operations.
pub type Result<T> = std::result::Result<T, TaskfillError>;
