//! Errors returned while reading color strings.

use thiserror::Error;

use crate::parse::Notation;

/// Result type alias for fallible color operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading a color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string looked like the given notation but could not be read as
    /// one, or a hex string was too long.
    #[error("invalid {0} string")]
    InvalidFormat(Notation),

    /// A slice of a hex string was not a valid base 16 number.
    #[error("invalid hex digits {digits:?} at offset {index}")]
    InvalidHexDigits {
        /// The characters that failed to parse.
        digits: String,
        /// Byte offset of the slice in the normalized hex string.
        index: usize,
    },
}
