//! Candidate and outcome space generation
//!
//! Both spaces depend only on the board dimensions and are computed once per
//! session.

use crate::core::{Code, Feedback, Symbol};

/// Generate every code of length `holes` over `colors` symbols
///
/// Codes are produced by mixed-radix counting from the all-zero code: the last
/// position is incremented and overflow carries leftward. The result therefore
/// holds exactly `colors^holes` distinct codes in ascending lexicographic order.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::generate_all_candidates;
///
/// let codes = generate_all_candidates(2, 2);
/// let text: Vec<String> = codes.iter().map(ToString::to_string).collect();
/// assert_eq!(text, ["0 0", "0 1", "1 0", "1 1"]);
/// ```
#[must_use]
pub fn generate_all_candidates(holes: usize, colors: u8) -> Vec<Code> {
    if colors == 0 {
        return Vec::new();
    }

    let capacity = usize::from(colors)
        .checked_pow(u32::try_from(holes).unwrap_or(u32::MAX))
        .unwrap_or(0);
    let mut candidates = Vec::with_capacity(capacity);
    let mut current: Vec<Symbol> = vec![0; holes];

    loop {
        candidates.push(Code::new(current.clone()));

        // Increment the last position and carry leftward on overflow
        let mut position = holes;
        loop {
            if position == 0 {
                // Carried out of the first position: every combination produced
                return candidates;
            }
            position -= 1;
            current[position] += 1;
            if current[position] < colors {
                break;
            }
            current[position] = 0;
        }
    }
}

/// Every feedback that is structurally reachable on a board of `holes` positions
///
/// Outcomes are stored in ascending `(blacks, whites)` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSpace {
    holes: usize,
    outcomes: Vec<Feedback>,
}

impl OutcomeSpace {
    /// Build the outcome space for `holes` positions
    ///
    /// Contains every `(b, w)` with `b + w <= holes` except `(holes - 1, 1)`:
    /// once all but one position match exactly, the last peg has no other
    /// position to be misplaced into.
    #[must_use]
    pub fn new(holes: usize) -> Self {
        let holes_u8 = holes.min(crate::core::MAX_HOLES) as u8;
        let mut outcomes = Vec::new();

        for blacks in 0..=holes_u8 {
            for whites in 0..=(holes_u8 - blacks) {
                if holes >= 1 && usize::from(blacks) == holes - 1 && whites == 1 {
                    continue;
                }
                outcomes.push(Feedback::new(blacks, whites));
            }
        }

        Self { holes, outcomes }
    }

    #[must_use]
    pub const fn holes(&self) -> usize {
        self.holes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Feedback] {
        &self.outcomes
    }

    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.outcomes.iter().copied()
    }

    /// Check whether `feedback` can occur on this board
    #[must_use]
    pub fn contains(&self, feedback: Feedback) -> bool {
        self.outcomes.binary_search(&feedback).is_ok()
    }
}

/// Build the [`OutcomeSpace`] for `holes` positions
///
/// # Examples
/// ```
/// use mastermind_solver::core::Feedback;
/// use mastermind_solver::solver::generate_outcome_space;
///
/// let outcomes = generate_outcome_space(4);
/// assert_eq!(outcomes.len(), 14);
/// assert!(outcomes.contains(Feedback::new(2, 2)));
/// assert!(!outcomes.contains(Feedback::new(3, 1)));
/// ```
#[must_use]
pub fn generate_outcome_space(holes: usize) -> OutcomeSpace {
    OutcomeSpace::new(holes)
}
