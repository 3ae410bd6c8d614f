//! Facade tying the automaton, path table, and coding paths together.
//!
//! Validates the `(k, L, M)` configuration once at construction, then
//! dispatches every call to the differential codec (run limit one) or the
//! enumerative ranker, converting between strings and digit vectors and
//! restoring the leading zeros that big-integer rendering drops.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::differential;
use crate::error::{Error, Result};
use crate::fsm::RunFsm;
use crate::paths::PathTable;
use crate::ranked;

/// Widest payload, in bits, that a codeword of `codeword_len` symbols can
/// carry under run limit `limit`.
///
/// # Errors
/// Returns [`Error::UnsupportedRunLimit`] or [`Error::ZeroCodewordLength`]
/// on an invalid shape.
pub fn max_data_bits(limit: usize, codeword_len: usize) -> Result<usize> {
    Ok(HomopolymerCodec::for_capacity(limit, codeword_len)?.max_data_bits())
}

/// Bijective codec between fixed-width bit strings and quaternary
/// codewords whose homopolymer runs never exceed the configured limit.
///
/// All owned state is immutable after construction, so a codec can serve
/// any number of concurrent callers; clone it (the tables are deep-copied)
/// or wrap it in an `Arc` to share. The symbol order 0 < 1 < 2 < 3 defines
/// the bijection; mapping symbols onto nucleotide letters is left to the
/// caller, since any fixed permutation works.
#[derive(Debug, Clone)]
pub struct HomopolymerCodec {
    limit: usize,
    codeword_len: usize,
    payload_bits: usize,
    fsm: RunFsm,
    paths: PathTable,
}

impl HomopolymerCodec {
    /// Build a codec carrying `payload_bits`-bit payloads in codewords of
    /// `codeword_len` symbols with runs capped at `limit`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedRunLimit`] when `limit` is outside
    /// `1..=5`, [`Error::ZeroCodewordLength`] when `codeword_len` is zero,
    /// [`Error::PayloadTooNarrow`] when `payload_bits` is zero (or below
    /// two for run limit one, where the first symbol alone consumes two
    /// bits), and [`Error::CapacityExceeded`] when the payload does not fit
    /// the codeword shape.
    pub fn new(limit: usize, codeword_len: usize, payload_bits: usize) -> Result<Self> {
        let codec = Self::for_capacity(limit, codeword_len)?;

        let min = if limit == 1 {
            differential::MIN_PAYLOAD_BITS
        } else {
            1
        };
        if payload_bits < min {
            return Err(Error::PayloadTooNarrow {
                got: payload_bits,
                min,
            });
        }
        let available = codec.max_data_bits();
        if payload_bits > available {
            return Err(Error::CapacityExceeded {
                requested: payload_bits,
                available,
            });
        }

        Ok(Self {
            payload_bits,
            ..codec
        })
    }

    /// Build a codec for capacity queries only.
    ///
    /// The payload width is pinned to the codeword length and not checked
    /// against capacity, so [`max_data_bits`](Self::max_data_bits) can be
    /// consulted before committing to a real payload width.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedRunLimit`] or
    /// [`Error::ZeroCodewordLength`] on an invalid shape.
    pub fn for_capacity(limit: usize, codeword_len: usize) -> Result<Self> {
        if codeword_len == 0 {
            return Err(Error::ZeroCodewordLength);
        }
        let fsm = RunFsm::new(limit)?;
        let paths = PathTable::fill(&fsm, codeword_len);
        Ok(Self {
            limit,
            codeword_len,
            payload_bits: codeword_len,
            fsm,
            paths,
        })
    }

    /// Maximum permitted homopolymer run length.
    pub fn run_limit(&self) -> usize {
        self.limit
    }

    /// Codeword length in quaternary symbols.
    pub fn codeword_len(&self) -> usize {
        self.codeword_len
    }

    /// Configured payload width in bits.
    pub fn payload_bits(&self) -> usize {
        self.payload_bits
    }

    /// Widest payload this codeword shape can carry.
    pub fn max_data_bits(&self) -> usize {
        self.paths.max_data_bits()
    }

    /// Total number of admissible codewords for this shape.
    pub fn codeword_count(&self) -> &BigUint {
        self.paths.total()
    }

    /// Encode a payload of exactly `payload_bits` binary digits into a
    /// codeword of `codeword_len` quaternary digits.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] or [`Error::InvalidSymbol`] when
    /// `bits` is not a `payload_bits`-digit string over `{'0', '1'}`.
    pub fn encode(&self, bits: &str) -> Result<String> {
        let payload = parse_digits(bits, 2, self.payload_bits)?;
        let word = if self.limit == 1 {
            self.check_differential_width()?;
            differential::encode(&payload, self.codeword_len)
        } else {
            let value = value_of(&payload, 2);
            ranked::unrank(&self.fsm, &self.paths, &value, self.codeword_len)?
        };
        Ok(render_digits(&word))
    }

    /// Decode a codeword back into its `payload_bits`-bit payload.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] or [`Error::InvalidSymbol`] when
    /// `code` is not a `codeword_len`-digit string over `{'0'..'3'}`,
    /// [`Error::RunTooLong`] when it violates the run constraint, and
    /// [`Error::PayloadOverflow`] when it is admissible but ranks outside
    /// the `payload_bits`-bit payload space.
    pub fn decode(&self, code: &str) -> Result<String> {
        let word = parse_digits(code, 4, self.codeword_len)?;
        let bits = if self.limit == 1 {
            self.check_differential_width()?;
            differential::decode(&word, self.payload_bits)?
        } else {
            let value = ranked::rank(&self.fsm, &self.paths, &word)?;
            if value.bits() as usize > self.payload_bits {
                return Err(Error::PayloadOverflow {
                    payload_bits: self.payload_bits,
                });
            }
            digits_of(&value, 2, self.payload_bits)
        };
        Ok(render_digits(&bits))
    }

    // A capacity-query codec for run limit one can pin the payload width
    // below the differential minimum; surface that instead of slicing past
    // the payload.
    fn check_differential_width(&self) -> Result<()> {
        if self.payload_bits < differential::MIN_PAYLOAD_BITS {
            return Err(Error::PayloadTooNarrow {
                got: self.payload_bits,
                min: differential::MIN_PAYLOAD_BITS,
            });
        }
        Ok(())
    }
}

fn parse_digits(text: &str, radix: u32, expected: usize) -> Result<Vec<u8>> {
    let got = text.chars().count();
    if got != expected {
        return Err(Error::LengthMismatch { expected, got });
    }
    let mut digits = Vec::with_capacity(expected);
    for (position, symbol) in text.chars().enumerate() {
        match symbol.to_digit(radix) {
            Some(digit) => digits.push(digit as u8),
            None => return Err(Error::InvalidSymbol { symbol, position }),
        }
    }
    Ok(digits)
}

fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|&digit| char::from(b'0' + digit)).collect()
}

/// Digits of `value` in `radix`, left-padded with zeros to `width`.
///
/// `value` must fit in `width` digits; callers check this before rendering.
pub(crate) fn digits_of(value: &BigUint, radix: u32, width: usize) -> Vec<u8> {
    let mut digits = vec![0u8; width];
    if value.is_zero() {
        return digits;
    }
    let rendered = value.to_str_radix(radix).into_bytes();
    debug_assert!(rendered.len() <= width);
    let pad = width - rendered.len();
    for (slot, digit) in digits[pad..].iter_mut().zip(&rendered) {
        *slot = digit - b'0';
    }
    digits
}

/// Integer carried by `digits` read most-significant first in `radix`.
pub(crate) fn value_of(digits: &[u8], radix: u32) -> BigUint {
    digits
        .iter()
        .fold(BigUint::zero(), |acc, &digit| acc * radix + digit)
}
