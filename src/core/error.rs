use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type FiscaleResult<T> = Result<T, FiscaleError>;

/// Errors that can occur while validating or decoding a tax identifier.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FiscaleError {
    /// The input does not have the expected shape (length, digits only, ...).
    #[error("invalid format '{value}': {reason}")]
    Format {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A character outside the allowed alphabet was found while computing a checksum.
    #[error("character '{character}' at position {position} is not allowed")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// 0-based character position in the input.
        position: usize,
    },

    /// The computed check character disagrees with the supplied one.
    #[error("check digit does not match: expected '{expected}', found '{found}'")]
    ChecksumMismatch {
        /// Check character computed from the payload.
        expected: char,
        /// Check character present in the input.
        found: char,
    },

    /// A decoding function was called on a syntactically invalid fiscal code.
    #[error("'{value}' is not a syntactically valid fiscal code")]
    Precondition {
        /// The rejected input.
        value: String,
    },

    /// Municipality table could not be read.
    #[error("municipality table error: {0}")]
    Csv(#[from] csv::Error),
}

impl FiscaleError {
    pub(crate) fn format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
