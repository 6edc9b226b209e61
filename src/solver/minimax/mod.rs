//! Minimax guess selection
//!
//! Implements worst-case minimization over the remaining candidate set.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, partition_sizes};
pub use selector::select_best_guess;
