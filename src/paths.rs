//! Path-count table over the bounded-run automaton.
//!
//! `continuations(t, s)` is the number of admissible length-`t` suffixes
//! from state `s`. The counts grow like `4^t` and overflow fixed-width
//! integers for modest codeword lengths, so every entry is a [`BigUint`].

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::fsm::{RunFsm, ALPHABET};

/// Immutable table of continuation counts, filled up to a fixed length.
#[derive(Debug, Clone)]
pub struct PathTable {
    rows: Vec<Vec<BigUint>>,
}

impl PathTable {
    /// Count admissible continuations for every suffix length up to `len`.
    ///
    /// Row zero is all ones (the empty suffix is always admissible); row
    /// `t` sums row `t - 1` over the allowed transitions of each state.
    pub fn fill(fsm: &RunFsm, len: usize) -> Self {
        let states = fsm.state_count();
        let mut rows = Vec::with_capacity(len + 1);
        rows.push(vec![BigUint::one(); states]);

        for t in 1..=len {
            let mut row = Vec::with_capacity(states);
            for state in 0..states {
                let mut sum = BigUint::zero();
                for symbol in 0..ALPHABET as u8 {
                    if let Some(successor) = fsm.next(state, symbol) {
                        sum += &rows[t - 1][successor];
                    }
                }
                row.push(sum);
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// Number of admissible continuations of length `remaining` from `state`.
    pub fn continuations(&self, remaining: usize, state: usize) -> &BigUint {
        &self.rows[remaining][state]
    }

    /// Total number of admissible codewords of the filled length.
    pub fn total(&self) -> &BigUint {
        &self.rows[self.rows.len() - 1][0]
    }

    /// Widest payload, in bits, that injects into the codeword space.
    ///
    /// An `m`-bit payload is read as an integer in `[0, 2^m)`; a lossless
    /// bijection needs `2^m <= total`, hence `m = bitlen(total) - 1`.
    pub fn max_data_bits(&self) -> usize {
        self.total().bits() as usize - 1
    }
}
