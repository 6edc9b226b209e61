//! Constraint filtering
//!
//! Narrows a candidate set to the codes consistent with observed feedback.

use super::Turn;
use crate::core::{Code, Feedback};

/// Keep the candidates that would have produced `feedback` for `guess`
///
/// Relative order is preserved, so a sorted input stays sorted. The true
/// hidden code always survives, since it produced `feedback` by definition.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback};
/// use mastermind_solver::solver::{filter_candidates, generate_all_candidates};
///
/// let all = generate_all_candidates(4, 6);
/// let secret = Code::new(vec![0, 1, 2, 3]);
/// let guess = Code::new(vec![0, 0, 1, 1]);
/// let feedback = Feedback::calculate(&guess, &secret);
///
/// let remaining = filter_candidates(&all, &guess, feedback);
/// assert!(remaining.contains(&secret));
/// assert!(remaining.len() < all.len());
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    let remaining: Vec<Code> = candidates
        .iter()
        .filter(|&candidate| Feedback::calculate(guess, candidate) == feedback)
        .cloned()
        .collect();

    log::trace!(
        "filter {guess} -> {feedback}: {} of {} candidates remain",
        remaining.len(),
        candidates.len()
    );

    remaining
}

/// Keep the candidates consistent with every turn in `history`
#[must_use]
pub fn filter_by_history(candidates: &[Code], history: &[Turn]) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&candidate| {
            history
                .iter()
                .all(|turn| Feedback::calculate(&turn.guess, candidate) == turn.feedback)
        })
        .cloned()
        .collect()
}
