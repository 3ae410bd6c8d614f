//! Closed-form codec for the strict no-repeat case.
//!
//! With a run limit of one there are exactly `4 * 3^(len - 1)` admissible
//! codewords: four choices for the first symbol, three for every later one.
//! Two payload bits select the first symbol directly; the rest of the
//! payload is re-expressed in base 3 and applied as successive shifts of
//! `d + 1` positions around the alphabet, so no symbol ever repeats its
//! predecessor. Decoding recovers the shifts and reads them back as one
//! base-3 integer, which avoids building a path table for this case.

use crate::codec::{digits_of, value_of};
use crate::error::{Error, Result};

/// Minimum payload width: the first codeword symbol consumes two bits.
pub const MIN_PAYLOAD_BITS: usize = 2;

/// Encode a payload of binary digits into a no-repeat codeword of `len`
/// symbols.
///
/// `bits` must hold at least [`MIN_PAYLOAD_BITS`] digits and its tail must
/// re-express in at most `len - 1` base-3 digits; the facade guarantees
/// both by validating the payload width against capacity.
pub fn encode(bits: &[u8], len: usize) -> Vec<u8> {
    debug_assert!(bits.len() >= MIN_PAYLOAD_BITS);

    let first = 2 * bits[0] + bits[1];
    let value = value_of(&bits[MIN_PAYLOAD_BITS..], 2);
    let shifts = digits_of(&value, 3, len - 1);

    let mut word = Vec::with_capacity(len);
    word.push(first);
    let mut previous = first;
    for shift in shifts {
        let symbol = (previous + shift + 1) % 4;
        word.push(symbol);
        previous = symbol;
    }
    word
}

/// Decode a no-repeat codeword back into `payload_bits` binary digits.
///
/// # Errors
/// Returns [`Error::RunTooLong`] when two adjacent symbols are equal, and
/// [`Error::PayloadOverflow`] when the recovered shifts encode a value that
/// does not fit in `payload_bits - 2` bits.
pub fn decode(word: &[u8], payload_bits: usize) -> Result<Vec<u8>> {
    let first = word[0];
    let mut shifts = Vec::with_capacity(word.len() - 1);
    for (index, pair) in word.windows(2).enumerate() {
        let step = (4 + pair[1] - pair[0]) % 4;
        if step == 0 {
            return Err(Error::RunTooLong {
                limit: 1,
                position: index + 1,
            });
        }
        shifts.push(step - 1);
    }

    let value = value_of(&shifts, 3);
    let rest_bits = payload_bits - MIN_PAYLOAD_BITS;
    if value.bits() as usize > rest_bits {
        return Err(Error::PayloadOverflow { payload_bits });
    }

    let mut bits = Vec::with_capacity(payload_bits);
    bits.push(first >> 1);
    bits.push(first & 1);
    bits.extend(digits_of(&value, 2, rest_bits));
    Ok(bits)
}
