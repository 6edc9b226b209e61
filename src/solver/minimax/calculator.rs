//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback};
use crate::solver::OutcomeSpace;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess: the
/// size of the largest bucket when `candidates` are partitioned by the feedback
/// each would give against `guess`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::generate_outcome_space;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let outcomes = generate_outcome_space(2);
/// let candidates = vec![Code::new(vec![0, 1]), Code::new(vec![1, 0])];
///
/// // Either answer produces a different feedback against 0 1
/// let guess = Code::new(vec![0, 1]);
/// assert_eq!(calculate_max_remaining(&guess, &candidates, &outcomes), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code], outcomes: &OutcomeSpace) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    partition_sizes(guess, candidates, outcomes)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the feedback they produce with the guess
///
/// Only non-empty buckets appear in the map.
#[must_use]
pub fn partition_sizes(
    guess: &Code,
    candidates: &[Code],
    outcomes: &OutcomeSpace,
) -> FxHashMap<Feedback, usize> {
    let mut counts =
        FxHashMap::with_capacity_and_hasher(outcomes.len().min(candidates.len()), FxBuildHasher);

    for candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        debug_assert!(outcomes.contains(feedback), "unreachable feedback {feedback}");
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{generate_all_candidates, generate_outcome_space};

    fn code(symbols: &[u8]) -> Code {
        Code::new(symbols.to_vec())
    }

    #[test]
    fn max_remaining_perfect_split() {
        let outcomes = generate_outcome_space(2);
        let candidates = [code(&[0, 0]), code(&[1, 1])];

        // 0 0 scores 2/0 against itself and 0/0 against 1 1
        assert_eq!(calculate_max_remaining(&code(&[0, 0]), &candidates, &outcomes), 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        let outcomes = generate_outcome_space(3);
        let candidates = [code(&[1, 1, 1]), code(&[2, 2, 2]), code(&[3, 3, 3])];

        assert_eq!(calculate_max_remaining(&code(&[0, 0, 0]), &candidates, &outcomes), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let outcomes = generate_outcome_space(4);
        assert_eq!(calculate_max_remaining(&code(&[0, 0, 1, 1]), &[], &outcomes), 0);
    }

    #[test]
    fn partitions_cover_every_candidate() {
        let outcomes = generate_outcome_space(4);
        let candidates = generate_all_candidates(4, 6);
        let partitions = partition_sizes(&code(&[0, 0, 1, 1]), &candidates, &outcomes);

        assert_eq!(partitions.values().sum::<usize>(), candidates.len());
        assert!(partitions.keys().all(|&feedback| outcomes.contains(feedback)));
    }

    #[test]
    fn opening_worst_case_on_standard_board() {
        // Knuth's figure for 1122 on the 4x6 board
        let outcomes = generate_outcome_space(4);
        let candidates = generate_all_candidates(4, 6);
        let max = calculate_max_remaining(&code(&[0, 0, 1, 1]), &candidates, &outcomes);

        assert_eq!(max, 256);
    }
}
