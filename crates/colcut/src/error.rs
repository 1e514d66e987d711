//! Error types for splitter construction.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when parsing a splitter specification.
///
/// All variants are construction-time failures; a failed construction
/// yields no usable [`Splitter`](crate::Splitter). The split operation
/// itself never fails.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Specification string is not one of the recognized forms.
    #[error("unknown spec: {0}")]
    UnknownSpec(String),

    /// A width token is not a valid integer.
    #[error("invalid width {token:?}: {source}")]
    InvalidWidth {
        /// The offending token, as written (untrimmed).
        token: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },

    /// A width parsed to zero or a negative number.
    #[error("not a positive width: {token}")]
    NonPositiveWidth {
        /// The offending token, as written (untrimmed).
        token: String,
    },
}

/// Result type for splitter construction.
pub type Result<T> = std::result::Result<T, SpecError>;
