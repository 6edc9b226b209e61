//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::{CancellationToken, Cancelled, OutcomeSpace};
use crate::core::{Code, Symbol};

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess from `candidates`
    ///
    /// Returns `Ok(None)` if `candidates` is empty.
    ///
    /// # Errors
    /// Returns `Cancelled` if the search observed a cancelled token.
    fn select_guess<'a>(
        &self,
        candidates: &'a [Code],
        outcomes: &OutcomeSpace,
        cancel: &CancellationToken,
    ) -> Result<Option<&'a Code>, Cancelled>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Smallest remaining candidate
    FirstAvailable(FirstAvailableStrategy),
    /// Worst-case minimization over remaining candidates
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        candidates: &'a [Code],
        outcomes: &OutcomeSpace,
        cancel: &CancellationToken,
    ) -> Result<Option<&'a Code>, Cancelled> {
        match self {
            Self::FirstAvailable(s) => s.select_guess(candidates, outcomes, cancel),
            Self::Minimax(s) => s.select_guess(candidates, outcomes, cancel),
        }
    }
}

impl StrategyType {
    /// Every strategy, in the order the statistics harness reports them
    pub const ALL: [Self; 2] = [
        Self::FirstAvailable(FirstAvailableStrategy),
        Self::Minimax(MinimaxStrategy),
    ];

    /// Create strategy from name string
    ///
    /// Supported names: "first", "first-available", "minimax".
    /// Returns `None` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "first" | "first-available" | "firstavailable" => {
                Some(Self::FirstAvailable(FirstAvailableStrategy))
            }
            "minimax" => Some(Self::Minimax(MinimaxStrategy)),
            _ => None,
        }
    }

    /// Canonical name, accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstAvailable(_) => "first-available",
            Self::Minimax(_) => "minimax",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// First available strategy
///
/// Picks the lexicographically smallest remaining candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstAvailableStrategy;

impl Strategy for FirstAvailableStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &'a [Code],
        _outcomes: &OutcomeSpace,
        _cancel: &CancellationToken,
    ) -> Result<Option<&'a Code>, Cancelled> {
        Ok(candidates.iter().min())
    }
}

/// Pure minimax strategy
///
/// Always selects the candidate that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &'a [Code],
        outcomes: &OutcomeSpace,
        cancel: &CancellationToken,
    ) -> Result<Option<&'a Code>, Cancelled> {
        let start = std::time::Instant::now();
        let best = super::minimax::select_best_guess(candidates, outcomes, cancel)?;

        if let Some((guess, max_remaining)) = best {
            log::debug!(
                "minimax picked {guess} (worst case {max_remaining}) from {} candidates in {:?}",
                candidates.len(),
                start.elapsed()
            );
        }

        Ok(best.map(|(guess, _)| guess))
    }
}

/// The fixed opening guess: two pegs of colour 0, the rest colour 1
///
/// On a single-colour board the second colour does not exist and colour 0 is
/// used throughout.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::opening_guess;
///
/// assert_eq!(opening_guess(4, 6).to_string(), "0 0 1 1");
/// assert_eq!(opening_guess(6, 8).to_string(), "0 0 1 1 1 1");
/// assert_eq!(opening_guess(3, 1).to_string(), "0 0 0");
/// ```
#[must_use]
pub fn opening_guess(holes: usize, colors: u8) -> Code {
    let second: Symbol = if colors > 1 { 1 } else { 0 };
    Code::new(
        (0..holes)
            .map(|i| if i < 2 { 0 } else { second })
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{generate_all_candidates, generate_outcome_space};

    fn setup_test_data() -> (Vec<Code>, OutcomeSpace) {
        let candidates = vec![
            Code::new(vec![2, 1, 0]),
            Code::new(vec![0, 2, 1]),
            Code::new(vec![1, 0, 2]),
        ];
        (candidates, generate_outcome_space(3))
    }

    #[test]
    fn first_available_picks_smallest() {
        let (candidates, outcomes) = setup_test_data();

        let strategy = FirstAvailableStrategy;
        let guess = strategy
            .select_guess(&candidates, &outcomes, &CancellationToken::new())
            .unwrap();

        assert_eq!(guess, Some(&Code::new(vec![0, 2, 1])));
    }

    #[test]
    fn first_available_ignores_cancellation() {
        let (candidates, outcomes) = setup_test_data();
        let token = CancellationToken::new();
        token.cancel();

        let guess = FirstAvailableStrategy.select_guess(&candidates, &outcomes, &token);
        assert!(matches!(guess, Ok(Some(_))));
    }

    #[test]
    fn minimax_strategy_selects_candidate() {
        let (candidates, outcomes) = setup_test_data();

        let strategy = StrategyType::Minimax(MinimaxStrategy);
        let guess = strategy
            .select_guess(&candidates, &outcomes, &CancellationToken::new())
            .unwrap()
            .unwrap();

        assert!(candidates.contains(guess));
    }

    #[test]
    fn strategies_return_none_when_empty() {
        let outcomes = generate_outcome_space(2);
        for strategy in StrategyType::ALL {
            let guess = strategy.select_guess(&[], &outcomes, &CancellationToken::new());
            assert_eq!(guess, Ok(None), "{}", strategy.name());
        }
    }

    #[test]
    fn minimax_beats_first_available_on_worst_case() {
        let candidates = generate_all_candidates(3, 3);
        let outcomes = generate_outcome_space(3);
        let token = CancellationToken::new();

        let first = StrategyType::FirstAvailable(FirstAvailableStrategy)
            .select_guess(&candidates, &outcomes, &token)
            .unwrap()
            .unwrap();
        let minimax = StrategyType::Minimax(MinimaxStrategy)
            .select_guess(&candidates, &outcomes, &token)
            .unwrap()
            .unwrap();

        let worst = |guess: &Code| {
            crate::solver::minimax::calculate_max_remaining(guess, &candidates, &outcomes)
        };
        assert!(worst(minimax) <= worst(first));
    }

    #[test]
    fn from_name_round_trips() {
        for strategy in StrategyType::ALL {
            assert_eq!(StrategyType::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(
            StrategyType::from_name("FIRST"),
            Some(StrategyType::FirstAvailable(FirstAvailableStrategy))
        );
        assert_eq!(StrategyType::from_name("entropy"), None);
    }

    #[test]
    fn default_is_minimax() {
        assert_eq!(StrategyType::default(), StrategyType::Minimax(MinimaxStrategy));
    }

    #[test]
    fn opening_guess_shapes() {
        assert_eq!(opening_guess(1, 6).symbols(), &[0]);
        assert_eq!(opening_guess(2, 6).symbols(), &[0, 0]);
        assert_eq!(opening_guess(4, 6).symbols(), &[0, 0, 1, 1]);
        assert_eq!(opening_guess(5, 2).symbols(), &[0, 0, 1, 1, 1]);
        assert_eq!(opening_guess(4, 1).symbols(), &[0, 0, 0, 0]);
    }
}
