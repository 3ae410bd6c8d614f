//! # Run-Length-Constrained DNA Codes
//!
//! *Enumerative coding that keeps homopolymer runs short.*
//!
//! ## Intuition First
//!
//! Imagine writing every admissible word of a language in a dictionary and
//! then referring to a word by its page number. If you can count, for any
//! prefix, how many words begin with it, you never need the dictionary:
//! the page number alone reconstructs the word, one letter at a time.
//!
//! This crate applies that idea to DNA storage. The "language" is the set
//! of quaternary strings of a fixed length whose runs of identical symbols
//! never exceed a limit `k`; the "page number" is the binary payload. The
//! counting is done once, on a small automaton, and encoding becomes a
//! walk that spends the payload against precomputed subtree counts.
//!
//! ## The Problem
//!
//! DNA synthesis and sequencing both degrade on homopolymers, stretches of
//! the same base such as `AAAAAA`. Pipelines therefore want codewords
//! whose runs are provably short. The naive fixes are unsatisfying:
//! - **Forbidding bit patterns after mapping**: loses rate and breaks the
//!   bijection, so some payloads become unencodable.
//! - **Run-breaking markers**: inflate the codeword and still need an
//!   escape scheme for the marker itself.
//!
//! Enumerative coding sidesteps both: every integer in `[0, N)` maps to
//! exactly one admissible codeword and back, where `N` is the count of
//! admissible codewords. Nothing is lost beyond the unavoidable rounding
//! of `N` down to a power of two.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon          Capacity of constrained (run-length-limited) channels
//! 1973  Cover            Enumerative source coding: rank/unrank via counts
//! 1990s Immink           RLL codes ship in CD, DVD, and magnetic recording
//! 2012  Church et al.    DNA as a digital storage medium
//! 2013  Goldman et al.   Rotating base-3 code avoids homopolymers entirely
//! 2017  Erlich/Zielinski DNA Fountain: screening random codewords
//! 2019  Organick et al.  Random access in a 200 MB synthetic DNA archive
//! ```
//!
//! Cover's observation is the engine here: if `P[t][s]` counts the
//! admissible length-`t` continuations from automaton state `s`, then the
//! lexicographic rank of a word is a sum of the counts of the subtrees it
//! skips, and the inverse walk recovers the word from the rank.
//!
//! ## Mathematical Formulation
//!
//! Let the automaton track the trailing run (identity and length) of the
//! emitted prefix; transitions that would exceed `k` are forbidden. With
//! `P[0][s] = 1` and
//!
//! ```text
//! P[t][s] = Σ_{σ : next(s, σ) defined} P[t-1][next(s, σ)]
//! ```
//!
//! the number of admissible length-`L` codewords is `N = P[L][0]`, and an
//! `M`-bit payload embeds bijectively whenever `2^M <= N`, i.e.
//! `M = bitlen(N) - 1`. For `k = 1` the count collapses to the closed form
//! `N = 4 * 3^(L-1)`, which this crate exploits with a differential codec
//! instead of a table.
//!
//! ## Complexity Analysis
//!
//! - **Construction**: `O(L * k)` big-integer additions of `O(L)`-bit
//!   operands, so `O(L^3 * k)` bit operations; the table holds
//!   `(L + 1) * (4k + 1)` entries of `O(L)` bits each.
//! - **Encode/decode**: `O(L)` big-integer comparisons and subtractions
//!   against `O(L)`-bit counts; no allocation beyond the output.
//!
//! ## Failure Modes
//!
//! 1. **Capacity rounding**: committing to `bitlen(N) - 1` payload bits
//!    sacrifices up to one integer of headroom when `N` is a power of two;
//!    the clean bit-width contract is worth it.
//! 2. **Table memory**: the path table grows quadratically in `L`; very
//!    long codewords are better split upstream than encoded in one piece.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **Ranked path** (`k >= 2`): automaton + big-integer path table +
//!   lexicographic rank/unrank.
//! - **Differential path** (`k = 1`): two payload bits pick the first
//!   symbol, the rest become base-3 shifts, so adjacent symbols always
//!   differ.
//!
//! The symbol order `0 < 1 < 2 < 3` defines the bijection. Assigning
//! symbols to nucleotide letters (say `0→A, 1→C, 2→G, 3→T`) is the
//! caller's choice; any fixed permutation preserves the run constraint.
//!
//! ## References
//!
//! - Cover, T. (1973). "Enumerative source encoding."
//! - Immink, K. A. S. (2004). "Codes for Mass Data Storage Systems."
//! - Ross, M. G., et al. (2013). "Characterizing and measuring bias in
//!   sequence data."
//! - Erlich, Y., Zielinski, D. (2017). "DNA Fountain enables a robust and
//!   efficient storage architecture."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod differential;
pub mod error;
pub mod fsm;
pub mod paths;
pub mod ranked;

pub use codec::{max_data_bits, HomopolymerCodec};
pub use error::Error;
