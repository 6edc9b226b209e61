//! Minimax-based guess selection
//!
//! Always selects the candidate that minimizes the worst-case remaining candidates.
//! Only codes still in the candidate set are considered as guesses.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use crate::solver::{CancellationToken, Cancelled, OutcomeSpace};
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Every candidate is scored in parallel against the whole set. The lowest score
/// wins, ties going to the lexicographically smallest code, so the result does
/// not depend on scheduling. Returns `None` if `candidates` is empty.
///
/// # Errors
/// Returns `Cancelled` if `cancel` was set before or during the search.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::minimax::select_best_guess;
/// use mastermind_solver::solver::{CancellationToken, generate_all_candidates, generate_outcome_space};
///
/// let candidates = generate_all_candidates(2, 2);
/// let outcomes = generate_outcome_space(2);
///
/// let (best, max_remaining) = select_best_guess(&candidates, &outcomes, &CancellationToken::new())
///     .unwrap()
///     .unwrap();
/// assert_eq!(best.to_string(), "0 0");
/// assert_eq!(max_remaining, 2);
/// ```
pub fn select_best_guess<'a>(
    candidates: &'a [Code],
    outcomes: &OutcomeSpace,
    cancel: &CancellationToken,
) -> Result<Option<(&'a Code, usize)>, Cancelled> {
    let best = candidates
        .par_iter()
        .map(|guess| {
            if cancel.is_cancelled() {
                return None;
            }
            Some((guess, calculate_max_remaining(guess, candidates, outcomes)))
        })
        .while_some()
        .min_by(|(g1, max1), (g2, max2)| max1.cmp(max2).then_with(|| g1.cmp(g2)));

    if cancel.is_cancelled() {
        return Err(Cancelled);
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::solver::{filter_candidates, generate_all_candidates, generate_outcome_space};

    fn code(symbols: &[u8]) -> Code {
        Code::new(symbols.to_vec())
    }

    #[test]
    fn selects_lowest_max_remaining() {
        // 0 1 splits the other three apart; 0 0 cannot tell 0 1 from 1 0
        let outcomes = generate_outcome_space(2);
        let candidates = [code(&[0, 0]), code(&[0, 1]), code(&[1, 0])];

        let (best, max_remaining) =
            select_best_guess(&candidates, &outcomes, &CancellationToken::new())
                .unwrap()
                .unwrap();

        assert_eq!(best, &code(&[0, 1]));
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn ties_go_to_smallest_code() {
        let outcomes = generate_outcome_space(3);
        let candidates = [code(&[2, 2, 2]), code(&[1, 1, 1])];

        // Both guesses split the pair perfectly
        let (best, _) = select_best_guess(&candidates, &outcomes, &CancellationToken::new())
            .unwrap()
            .unwrap();
        assert_eq!(best, &code(&[1, 1, 1]));
    }

    #[test]
    fn deterministic_across_calls() {
        let outcomes = generate_outcome_space(4);
        let all = generate_all_candidates(4, 6);
        let candidates = filter_candidates(&all, &code(&[0, 0, 1, 1]), Feedback::new(1, 1));
        let token = CancellationToken::new();

        let first = select_best_guess(&candidates, &outcomes, &token).unwrap();
        let second = select_best_guess(&candidates, &outcomes, &token).unwrap();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn single_candidate_returns_it() {
        let outcomes = generate_outcome_space(4);
        let candidates = [code(&[3, 1, 4, 1])];

        let result = select_best_guess(&candidates, &outcomes, &CancellationToken::new());
        assert_eq!(result, Ok(Some((&candidates[0], 1))));
    }

    #[test]
    fn returns_none_on_empty_candidates() {
        let outcomes = generate_outcome_space(4);
        let result = select_best_guess(&[], &outcomes, &CancellationToken::new());
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn cancelled_token_aborts_search() {
        let outcomes = generate_outcome_space(4);
        let candidates = generate_all_candidates(4, 6);
        let token = CancellationToken::new();
        token.cancel();

        assert_eq!(select_best_guess(&candidates, &outcomes, &token), Err(Cancelled));
    }
}
