//! Error types for parsing bottles and applying cellar rules.

use thiserror::Error;

/// Error produced when a cellar line cannot be turned into a [`Beer`](crate::Beer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line does not have the `code~date[~size]` shape.
    #[error("malformed line {line:?}: expected code~MM/DD/YY[~size]")]
    MalformedLine {
        /// The offending line, without its line terminator.
        line: String,
    },

    /// The date field is not a valid `MM/DD/YY` calendar date.
    #[error("malformed date {value:?}: expected MM/DD/YY")]
    MalformedDate {
        /// The date field as it appeared in the line.
        value: String,
    },
}

impl ParseError {
    /// Get a short label for the error kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MalformedLine { .. } => "malformed line",
            Self::MalformedDate { .. } => "malformed date",
        }
    }
}

/// Error raised by the checked cellar operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellarError {
    /// A bottle of the same beer is already stored in a different size.
    #[error("beer {code} is already cellared as {existing}, refusing {candidate}")]
    IncompatibleSize {
        /// The shared beer code.
        code: String,
        /// The size already present in the cellar.
        existing: String,
        /// The size of the rejected bottle.
        candidate: String,
    },
}
