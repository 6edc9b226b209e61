//! Mastermind solving engine
//!
//! Candidate generation, constraint filtering, guess selection and the
//! per-game session state machine.

mod cancel;
pub mod filter;
pub mod minimax;
mod session;
pub mod space;
pub mod strategy;

pub use cancel::{Cancelled, CancellationToken};
pub use filter::{filter_by_history, filter_candidates};
pub use session::{
    DEFAULT_MAX_TURNS, GameStatus, Session, SessionConfig, SessionError, SessionState, Turn,
    TurnOutcome,
};
pub use space::{OutcomeSpace, generate_all_candidates, generate_outcome_space};
pub use strategy::{
    FirstAvailableStrategy, MinimaxStrategy, Strategy, StrategyType, opening_guess,
};
