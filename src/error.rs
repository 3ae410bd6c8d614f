//! Error types for run-length-constrained coding.

use thiserror::Error;

/// Error variants for codec construction, encoding, and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The maximum run length is outside the supported range.
    #[error("unsupported run limit {0}, expected 1..=5")]
    UnsupportedRunLimit(usize),

    /// The codeword length is zero.
    #[error("codeword length must be positive")]
    ZeroCodewordLength,

    /// The payload width is below the minimum for this run limit.
    #[error("payload width {got} below the minimum of {min} bits")]
    PayloadTooNarrow {
        /// Requested payload width in bits.
        got: usize,
        /// Smallest payload width the configuration accepts.
        min: usize,
    },

    /// The payload width exceeds what the codeword shape can carry.
    #[error("payload width {requested} exceeds the {available}-bit capacity")]
    CapacityExceeded {
        /// Requested payload width in bits.
        requested: usize,
        /// Capacity of the codeword shape in bits.
        available: usize,
    },

    /// An input string has the wrong length.
    #[error("expected {expected} symbols, got {got}")]
    LengthMismatch {
        /// Length the codec was configured for.
        expected: usize,
        /// Length of the string that was supplied.
        got: usize,
    },

    /// An input string contains a character outside its alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based position of the character.
        position: usize,
    },

    /// A codeword contains a homopolymer run longer than the limit.
    #[error("run longer than {limit} ending at position {position}")]
    RunTooLong {
        /// Maximum permitted run length.
        limit: usize,
        /// Zero-based position of the symbol that overran the limit.
        position: usize,
    },

    /// An admissible codeword ranks outside the configured payload space.
    #[error("codeword rank does not fit in {payload_bits} payload bits")]
    PayloadOverflow {
        /// Configured payload width in bits.
        payload_bits: usize,
    },

    /// A rank at or beyond the total codeword count was supplied.
    #[error("rank outside the codeword space")]
    RankOutOfRange,
}

/// A specialized Result type for constrained-coding operations.
pub type Result<T> = std::result::Result<T, Error>;
