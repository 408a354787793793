//! Errors reported while constructing codes and decoding.

use thiserror::Error;

/// Error returned by the construction, lookup and (strict) decoding operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No symbol was given, so there is nothing to build a code for.
    #[error("no symbols to construct the code for")]
    EmptyInput,

    /// The length limiter could not bring the longest codeword down to `max_code_length`.
    #[error("cannot limit code lengths to {max_code_length} bits (longest codeword has {longest} bits)")]
    LengthLimitInfeasible {
        /// Requested bound.
        max_code_length: u32,
        /// The longest length at the moment the limiter gave up.
        longest: u32
    },

    /// Codeword lookup for an index past the alphabet.
    #[error("index {index} is out of range for alphabet of size {size}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of symbols in the alphabet.
        size: usize
    },

    /// The symbol to encode is not in the alphabet of the coding.
    #[error("symbol is not in the alphabet of the coding")]
    UnknownSymbol,

    /// The codeword does not fit in [`Code`](crate::Code).
    #[error("codeword of {len} bits exceeds the supported maximum of {} bits", crate::Code::MAX_LEN)]
    CodeTooLong {
        /// Length of the offending codeword.
        len: u32
    },

    /// The bit sequence ends in the middle of a codeword.
    #[error("bit sequence ends with {trailing_bits} bits that do not complete a codeword")]
    IncompleteCodeword {
        /// Number of bits after the last complete codeword.
        trailing_bits: usize
    },
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
