//! Command implementations

pub mod play;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use play::{PlayGame, random_code, run_play};
pub use simple::{Assistant, run_simple};
pub use solve::{SolveResult, SolveStep, solve_code};
pub use test_all::{TestAllStatistics, run_test_all};

use std::io::{self, Write};

/// Get user input with a prompt
///
/// A closed stdin is reported as `UnexpectedEof` so interactive loops terminate.
pub(crate) fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }

    Ok(input.trim().to_string())
}
