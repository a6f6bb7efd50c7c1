//! Decode failure type.

use thiserror::Error;

/// The codeword stream violates a structural expectation of the format.
///
/// Any of these aborts the whole decode; no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The length field (element 0) is zero or larger than the stream.
    #[error("invalid declared length {declared} for a stream of {available} codewords")]
    InvalidLength {
        /// Value of element 0
        declared: u32,
        /// Number of codewords actually supplied
        available: usize,
    },

    /// A decoder needed a codeword at or beyond the declared length.
    #[error("read at position {position} past declared data length {declared}")]
    Truncated {
        /// Position that was requested
        position: usize,
        /// Declared data length
        declared: usize,
    },

    /// A base-900 group did not start with the mandatory leading `1` digit.
    #[error("numeric group is missing its leading sentinel digit")]
    MissingSentinel,

    /// A base-900 group has more digits than the exponent table covers.
    #[error("base-900 group of {len} codewords exceeds the {max} codeword limit")]
    GroupTooLong {
        /// Number of codewords in the group
        len: usize,
        /// Largest supported group
        max: usize,
    },

    /// The macro block segment index does not fit an integer.
    #[error("macro block segment index {0:?} is not a valid integer")]
    InvalidSegmentIndex(String),

    /// A macro sub-marker (922/923) appeared outside a macro control block.
    #[error("macro marker {0} outside a macro control block")]
    MarkerOutsideMacroBlock(u32),

    /// A control codeword other than the terminator inside the optional field span.
    #[error("unexpected control codeword {0} in macro optional field")]
    UnexpectedControlInOptionalField(u32),

    /// The symbol decoded to no text at all.
    #[error("codeword stream decoded to empty text")]
    EmptyResult,
}

/// Convenience `Result` alias using [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;
