//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Codes and feedback are plain values; everything here is pure and deterministic.

mod code;
mod feedback;

pub use code::{Code, InvalidGuess, MAX_HOLES, ParseCodeError, Symbol};
pub use feedback::{Feedback, ParseFeedbackError, blacks_count, whites_count};
