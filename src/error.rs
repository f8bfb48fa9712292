//! Error types for perft-validator

use std::path::PathBuf;

/// Errors raised while loading or validating a position log.
///
/// A successor mismatch is not an error; it is reported through
/// [`crate::validator::ValidationResult`].
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The oracle could not turn a position token into a legal position.
    #[error("malformed position {fen:?}: {reason}")]
    MalformedPosition { fen: String, reason: String },

    #[error("failed to access log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ValidateError {
    pub fn malformed(fen: &str, reason: impl ToString) -> Self {
        ValidateError::MalformedPosition {
            fen: fen.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ValidateError::MalformedPosition { .. })
    }
}
