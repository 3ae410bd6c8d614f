//! Enumerative rank/unrank over the constrained codeword space.
//!
//! Admissible codewords are ordered lexicographically by symbol index
//! (0 < 1 < 2 < 3). Unranking walks the automaton layer by layer,
//! skipping the counted subtree of every admissible symbol that precedes
//! the target; ranking accumulates the same counts. The two walks are
//! exact inverses.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::fsm::{RunFsm, ALPHABET};
use crate::paths::PathTable;

/// Codeword at position `rank` in lexicographic order.
///
/// `paths` must be filled to at least `len`.
///
/// # Errors
/// Returns [`Error::RankOutOfRange`] when `rank` is not below the total
/// codeword count for `len`.
pub fn unrank(fsm: &RunFsm, paths: &PathTable, rank: &BigUint, len: usize) -> Result<Vec<u8>> {
    if rank >= paths.continuations(len, 0) {
        return Err(Error::RankOutOfRange);
    }

    let mut remaining = rank.clone();
    let mut state = 0;
    let mut word = Vec::with_capacity(len);

    for position in 1..=len {
        for symbol in 0..ALPHABET as u8 {
            let Some(successor) = fsm.next(state, symbol) else {
                continue;
            };
            let below = paths.continuations(len - position, successor);
            if remaining < *below {
                word.push(symbol);
                state = successor;
                break;
            }
            remaining -= below;
        }
    }

    debug_assert_eq!(word.len(), len);
    debug_assert!(remaining.is_zero());
    Ok(word)
}

/// Lexicographic position of an admissible codeword.
///
/// # Errors
/// Returns [`Error::RunTooLong`] when `word` contains a homopolymer run
/// longer than the automaton's limit.
pub fn rank(fsm: &RunFsm, paths: &PathTable, word: &[u8]) -> Result<BigUint> {
    let len = word.len();
    let mut state = 0;
    let mut position = BigUint::zero();

    for (index, &symbol) in word.iter().enumerate() {
        for lower in 0..symbol {
            if let Some(successor) = fsm.next(state, lower) {
                position += paths.continuations(len - index - 1, successor);
            }
        }
        state = fsm.next(state, symbol).ok_or(Error::RunTooLong {
            limit: fsm.limit(),
            position: index,
        })?;
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_run(word: &[u8]) -> usize {
        let mut longest = 0;
        let mut current = 0;
        let mut previous = None;
        for &symbol in word {
            current = if previous == Some(symbol) { current + 1 } else { 1 };
            previous = Some(symbol);
            longest = longest.max(current);
        }
        longest
    }

    fn admissible_words(limit: usize, len: usize) -> Vec<Vec<u8>> {
        (0..4u64.pow(len as u32))
            .map(|packed| {
                let mut word = vec![0u8; len];
                let mut rest = packed;
                for slot in word.iter_mut().rev() {
                    *slot = (rest % 4) as u8;
                    rest /= 4;
                }
                word
            })
            .filter(|word| max_run(word) <= limit)
            .collect()
    }

    #[test]
    fn test_unrank_matches_enumeration() {
        // Integer enumeration in base 4 is already lexicographic, so the
        // filtered list is the ground truth for every rank.
        for (limit, len) in [(1, 4), (2, 4), (3, 5), (5, 4)] {
            let fsm = RunFsm::new(limit).unwrap();
            let paths = PathTable::fill(&fsm, len);
            let words = admissible_words(limit, len);
            assert_eq!(BigUint::from(words.len()), *paths.total());

            for (n, expected) in words.iter().enumerate() {
                let n = BigUint::from(n);
                let word = unrank(&fsm, &paths, &n, len).unwrap();
                assert_eq!(&word, expected);
                assert_eq!(rank(&fsm, &paths, &word).unwrap(), n);
            }
        }
    }

    #[test]
    fn test_smallest_and_largest() {
        let fsm = RunFsm::new(2).unwrap();
        let paths = PathTable::fill(&fsm, 4);

        let smallest = unrank(&fsm, &paths, &BigUint::zero(), 4).unwrap();
        assert_eq!(smallest, vec![0, 0, 1, 0]);

        let largest_rank = paths.total() - 1u32;
        let largest = unrank(&fsm, &paths, &largest_rank, 4).unwrap();
        assert_eq!(largest, vec![3, 3, 2, 3]);
    }

    #[test]
    fn test_unrank_rejects_rank_at_total() {
        let fsm = RunFsm::new(2).unwrap();
        let paths = PathTable::fill(&fsm, 4);
        let total = paths.total().clone();
        assert_eq!(
            unrank(&fsm, &paths, &total, 4).unwrap_err(),
            Error::RankOutOfRange
        );
    }

    #[test]
    fn test_rank_rejects_overlong_run() {
        let fsm = RunFsm::new(2).unwrap();
        let paths = PathTable::fill(&fsm, 4);
        assert_eq!(
            rank(&fsm, &paths, &[0, 0, 0, 1]).unwrap_err(),
            Error::RunTooLong {
                limit: 2,
                position: 2
            }
        );
    }

    #[test]
    fn test_long_codeword_roundtrip() {
        let fsm = RunFsm::new(3).unwrap();
        let len = 80;
        let paths = PathTable::fill(&fsm, len);
        // A rank needing more than 64 bits exercises the big-integer path.
        let rank_in: BigUint = paths.total() >> 1;
        assert!(rank_in.bits() > 64);
        let word = unrank(&fsm, &paths, &rank_in, len).unwrap();
        assert_eq!(word.len(), len);
        assert!(max_run(&word) <= 3);
        assert_eq!(rank(&fsm, &paths, &word).unwrap(), rank_in);
    }

    #[test]
    fn test_monotone_in_rank() {
        let fsm = RunFsm::new(3).unwrap();
        let paths = PathTable::fill(&fsm, 5);
        let mut previous: Option<Vec<u8>> = None;
        let mut n = BigUint::zero();
        while &n < paths.total() {
            let word = unrank(&fsm, &paths, &n, 5).unwrap();
            if let Some(ref before) = previous {
                assert!(before < &word);
            }
            previous = Some(word);
            n += 1u32;
        }
    }
}
