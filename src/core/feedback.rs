//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of peg counts a codemaker returns for a guess:
//! - blacks = right colour in the right position
//! - whites = right colour in the wrong position, counted with multiset semantics
//!
//! Scoring is symmetric: `Feedback::calculate(a, b) == Feedback::calculate(b, a)`.

use super::Code;
use std::fmt;
use std::str::FromStr;

/// Black and white peg counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    blacks: u8,
    whites: u8,
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeedbackError(String);

impl fmt::Display for ParseFeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid feedback '{}': expected two counts like '1 2' or '1/2'",
            self.0
        )
    }
}

impl std::error::Error for ParseFeedbackError {}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(blacks: u8, whites: u8) -> Self {
        Self { blacks, whites }
    }

    /// Full match on a board with `holes` positions
    #[inline]
    #[must_use]
    pub const fn perfect(holes: usize) -> Self {
        Self::new(holes as u8, 0)
    }

    #[inline]
    #[must_use]
    pub const fn blacks(self) -> u8 {
        self.blacks
    }

    #[inline]
    #[must_use]
    pub const fn whites(self) -> u8 {
        self.whites
    }

    /// Check if every one of the `holes` positions matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, holes: usize) -> bool {
        self.blacks as usize == holes
    }

    /// Calculate the feedback when `guess` is scored against `target`
    ///
    /// Both codes must have the same length, at most [`MAX_HOLES`](super::MAX_HOLES).
    ///
    /// # Algorithm
    /// 1. First pass: count blacks and pool the target symbols that did not match
    /// 2. Second pass: each unmatched guess symbol consumes one pooled target symbol
    ///
    /// The second pass yields `Σ_colour min(guess_left[colour], target_left[colour])`,
    /// so a target peg is never counted twice.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess = Code::new(vec![0, 0, 1, 1]);
    /// let target = Code::new(vec![0, 1, 2, 3]);
    ///
    /// // Position 0 matches exactly; one of the guess's 1s sits in the wrong place
    /// assert_eq!(Feedback::calculate(&guess, &target), Feedback::new(1, 1));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, target: &Code) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "codes must be the same length");

        let mut target_available = [0u8; 256];
        let mut blacks = 0u8;

        // First pass: exact matches, everything else stays in the pool
        for (&g, &t) in guess.symbols().iter().zip(target.symbols()) {
            if g == t {
                blacks += 1;
            } else {
                target_available[usize::from(t)] += 1;
            }
        }

        // Second pass: right colour, wrong position
        let mut whites = 0u8;
        for (&g, &t) in guess.symbols().iter().zip(target.symbols()) {
            if g != t {
                let available = &mut target_available[usize::from(g)];
                if *available > 0 {
                    *available -= 1;
                    whites += 1;
                }
            }
        }

        Self { blacks, whites }
    }
}

/// Count positions where `guess` and `target` share a symbol
#[must_use]
pub fn blacks_count(guess: &Code, target: &Code) -> usize {
    usize::from(Feedback::calculate(guess, target).blacks)
}

/// Count symbols shared by `guess` and `target` at different positions
#[must_use]
pub fn whites_count(guess: &Code, target: &Code) -> usize {
    usize::from(Feedback::calculate(guess, target).whites)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.blacks, self.whites)
    }
}

/// Parse feedback from `"1 2"`, `"1,2"` or `"1/2"` (blacks first)
impl FromStr for Feedback {
    type Err = ParseFeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts: Vec<u8> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ParseFeedbackError(s.to_string()))?;

        match counts.as_slice() {
            &[blacks, whites] => Ok(Self::new(blacks, whites)),
            _ => Err(ParseFeedbackError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::generate_all_candidates;

    /// Pairwise consumption with sentinels, scanning guess index then target index
    fn reference_whites(guess: &[u8], target: &[u8]) -> usize {
        let mut g: Vec<i32> = guess.iter().map(|&s| i32::from(s)).collect();
        let mut t: Vec<i32> = target.iter().map(|&s| i32::from(s)).collect();
        let n = g.len() as i32;

        for i in 0..g.len() {
            if g[i] == t[i] {
                g[i] = -(i as i32) - 1;
                t[i] = -(i as i32) - 1 - n;
            }
        }

        let mut whites = 0;
        for i in 0..g.len() {
            for j in 0..t.len() {
                if i != j && g[i] == t[j] {
                    whites += 1;
                    g[i] = -(i as i32) - 1;
                    t[j] = -(j as i32) - 1 - n;
                    break;
                }
            }
        }
        whites
    }

    fn code(symbols: &[u8]) -> Code {
        Code::new(symbols.to_vec())
    }

    #[test]
    fn opening_guess_against_sequential_target() {
        let feedback = Feedback::calculate(&code(&[0, 0, 1, 1]), &code(&[0, 1, 2, 3]));
        assert_eq!(feedback.blacks(), 1);
        assert_eq!(feedback.whites(), 1);
    }

    #[test]
    fn all_black() {
        let guess = code(&[3, 1, 4, 1]);
        let feedback = Feedback::calculate(&guess, &guess);

        assert_eq!(feedback, Feedback::perfect(4));
        assert!(feedback.is_perfect(4));
        assert!(!feedback.is_perfect(5));
    }

    #[test]
    fn all_white() {
        let feedback = Feedback::calculate(&code(&[0, 1, 2, 3]), &code(&[3, 2, 1, 0]));
        assert_eq!(feedback, Feedback::new(0, 4));
    }

    #[test]
    fn no_match() {
        let feedback = Feedback::calculate(&code(&[0, 0, 0, 0]), &code(&[1, 2, 3, 4]));
        assert_eq!(feedback, Feedback::new(0, 0));
    }

    #[test]
    fn duplicates_are_supply_limited() {
        // Target holds a single 1, so only one of the guess's three 1s can score
        let feedback = Feedback::calculate(&code(&[1, 1, 1, 0]), &code(&[2, 3, 4, 1]));
        assert_eq!(feedback, Feedback::new(0, 1));

        // The black 2 is not reused as a white for the second 2
        let feedback = Feedback::calculate(&code(&[2, 2, 0, 0]), &code(&[2, 1, 1, 1]));
        assert_eq!(feedback, Feedback::new(1, 0));
    }

    #[test]
    fn matches_pairwise_reference_exhaustively() {
        let codes = generate_all_candidates(4, 4);
        for guess in &codes {
            for target in &codes {
                let feedback = Feedback::calculate(guess, target);
                assert_eq!(
                    usize::from(feedback.whites()),
                    reference_whites(guess.symbols(), target.symbols()),
                    "{guess} vs {target}"
                );
            }
        }
    }

    #[test]
    fn symmetric_and_bounded() {
        let codes = generate_all_candidates(3, 4);
        for a in &codes {
            for b in &codes {
                assert_eq!(Feedback::calculate(a, b), Feedback::calculate(b, a));
                assert_eq!(blacks_count(a, b), blacks_count(b, a));
                assert_eq!(whites_count(a, b), whites_count(b, a));
                assert!(blacks_count(a, b) + whites_count(a, b) <= 3);
            }
        }
    }

    #[test]
    fn self_match_is_perfect() {
        for c in generate_all_candidates(3, 3) {
            assert_eq!(Feedback::calculate(&c, &c), Feedback::new(3, 0));
        }
    }

    #[test]
    fn feedback_from_str_valid() {
        let a: Feedback = "1 2".parse().unwrap();
        let b: Feedback = "1,2".parse().unwrap();
        let c: Feedback = " 1/2 ".parse().unwrap();

        assert_eq!(a, Feedback::new(1, 2));
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.to_string(), "1/2");
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!("".parse::<Feedback>().is_err());
        assert!("1".parse::<Feedback>().is_err());
        assert!("1 2 3".parse::<Feedback>().is_err());
        assert!("b w".parse::<Feedback>().is_err());
    }
}
