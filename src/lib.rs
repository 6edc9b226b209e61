//! Mastermind Solver
//!
//! A Mastermind code breaker that narrows the set of codes consistent with the
//! feedback so far and picks each next guess with a pluggable strategy:
//! first-available or Knuth-style minimax.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//! use mastermind_solver::solver::{GameStatus, Session, SessionConfig, StrategyType};
//!
//! // Score a guess against a hidden code
//! let guess: Code = "0 0 1 1".parse().unwrap();
//! let hidden: Code = "0 1 2 3".parse().unwrap();
//! assert_eq!(Feedback::calculate(&guess, &hidden), Feedback::new(1, 1));
//!
//! // Let the solver break it
//! let mut session = Session::new(SessionConfig::new(4, 6, StrategyType::default())).unwrap();
//! session.set_hidden_code(hidden).unwrap();
//! assert_eq!(session.play_out().unwrap(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
