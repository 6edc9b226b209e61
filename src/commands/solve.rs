//! Code solving command
//!
//! Lets the solver break a specific hidden code and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::{GameStatus, Session, SessionConfig, SessionError, filter_candidates};

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub target: Code,
    pub holes: usize,
}

/// A single guess step in the solution
pub struct SolveStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` with a fresh session built from `config`
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is not a playable board
/// - The target does not fit the board (`InvalidGuess`)
pub fn solve_code(config: SessionConfig, target: &Code) -> Result<SolveResult, SessionError> {
    let mut session = Session::new(config)?;
    session.set_hidden_code(target.clone())?;

    let mut steps = Vec::new();
    loop {
        let outcome = session.take_turn()?;

        // The session narrows lazily, so its candidates are the ones this guess was picked from
        let candidates_before = session.candidates().len();
        let candidates_after =
            filter_candidates(session.candidates(), &outcome.guess, outcome.feedback).len();

        steps.push(SolveStep {
            guess: outcome.guess,
            feedback: outcome.feedback,
            candidates_before,
            candidates_after,
        });

        if outcome.status != GameStatus::Continuing {
            return Ok(SolveResult {
                success: outcome.status == GameStatus::Won,
                steps,
                target: target.clone(),
                holes: config.holes,
            });
        }
    }
}
