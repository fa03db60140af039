//! Error types for the Tessera workspace.
//!
//! Organized by subsystem: grid construction and hierarchy traversal.
//! Expected outcomes of normal use (object not tracked, nothing within
//! range, object already present) are never errors; they surface as
//! `bool` or `Option` return values instead.

use thiserror::Error;

/// Errors from spatial grid construction or configuration validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// An argument failed validation (non-square area, zero size,
    /// degenerate cell size).
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// What went wrong.
        reason: String,
    },
}

impl GridError {
    /// Shorthand for building an [`InvalidArgument`](Self::InvalidArgument).
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Errors from reading a traversal cursor outside its active state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum CursorError {
    /// `current()` was read before the first `advance()`.
    #[error("cursor has not been advanced yet")]
    NotStarted,
    /// `current()` was read after `advance()` returned `false`.
    #[error("cursor is past the last item")]
    Exhausted,
}
