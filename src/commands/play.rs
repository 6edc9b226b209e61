//! Play mode: the human breaks a random code
//!
//! The computer picks a secret and scores each typed guess.

use super::get_user_input;
use crate::core::{Code, Feedback, InvalidGuess, Symbol};
use crate::output::formatters::{code_to_pegs, feedback_to_pegs};
use crate::solver::{GameStatus, SessionConfig, Turn};
use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a uniformly random code for a `holes` x `colors` board
pub fn random_code<R: Rng + ?Sized>(rng: &mut R, holes: usize, colors: u8) -> Code {
    Code::new(
        (0..holes)
            .map(|_| rng.random_range(0..colors))
            .collect::<Vec<Symbol>>(),
    )
}

/// A single human-guesses-computer game
pub struct PlayGame {
    secret: Code,
    holes: usize,
    colors: u8,
    max_turns: usize,
    history: Vec<Turn>,
    status: GameStatus,
}

impl PlayGame {
    #[must_use]
    pub fn new(secret: Code, config: &SessionConfig) -> Self {
        Self {
            secret,
            holes: config.holes,
            colors: config.colors,
            max_turns: config.max_turns,
            history: Vec::new(),
            status: GameStatus::Continuing,
        }
    }

    /// Score a guess against the secret and record it
    ///
    /// Guesses after the game ended are scored but not recorded.
    ///
    /// # Errors
    /// Returns `InvalidGuess` if the guess does not fit the board; nothing is recorded.
    pub fn guess(&mut self, guess: Code) -> Result<(Feedback, GameStatus), InvalidGuess> {
        guess.validate(self.holes, self.colors)?;
        let feedback = Feedback::calculate(&guess, &self.secret);

        if self.status == GameStatus::Continuing {
            self.history.push(Turn { guess, feedback });
            self.status = if feedback.is_perfect(self.holes) {
                GameStatus::Won
            } else if self.history.len() >= self.max_turns {
                GameStatus::Lost
            } else {
                GameStatus::Continuing
            };
        }

        Ok((feedback, self.status))
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
}

/// Run the interactive play mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(config: &SessionConfig, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Mastermind - Break the Code                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "I've picked {} pegs from colours 0-{}. You have {} guesses.",
        config.holes,
        config.colors - 1,
        config.max_turns
    );
    println!("Enter guesses like '0 1 2 3' or '0123'.");
    println!("Feedback: ● right colour, right place   ○ right colour, wrong place\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'reveal' to give up\n");

    let mut game = PlayGame::new(random_code(&mut rng, config.holes, config.colors), config);
    log::debug!("secret code: {}", game.secret());

    loop {
        let turn = game.history().len() + 1;
        let input = get_user_input(&format!("Guess {turn}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = PlayGame::new(random_code(&mut rng, config.holes, config.colors), config);
                println!("\n🔄 New game started!\n");
                continue;
            }
            "reveal" => {
                println!("\nThe code was {}\n", code_to_pegs(game.secret()));
                game = PlayGame::new(random_code(&mut rng, config.holes, config.colors), config);
                println!("🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let guess = match input.parse::<Code>() {
            Ok(guess) => guess,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let (feedback, status) = match game.guess(guess.clone()) {
            Ok(result) => result,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        println!(
            "  {}  {}  ({feedback})",
            code_to_pegs(&guess),
            feedback_to_pegs(feedback, config.holes)
        );

        let finished = match status {
            GameStatus::Continuing => false,
            GameStatus::Won => {
                println!(
                    "\n{}",
                    format!(
                        "🎉 Cracked it in {} {}!",
                        turn,
                        if turn == 1 { "guess" } else { "guesses" }
                    )
                    .green()
                    .bold()
                );
                true
            }
            GameStatus::Lost => {
                println!(
                    "\n{} The code was {}",
                    "❌ Out of guesses.".red().bold(),
                    code_to_pegs(game.secret())
                );
                true
            }
        };

        if finished {
            match get_user_input("\nPlay again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game =
                        PlayGame::new(random_code(&mut rng, config.holes, config.colors), config);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;

    fn config() -> SessionConfig {
        SessionConfig::new(4, 6, StrategyType::default()).with_max_turns(3)
    }

    #[test]
    fn random_code_fits_board() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = random_code(&mut rng, 5, 3);
            assert!(code.validate(5, 3).is_ok());
        }
    }

    #[test]
    fn random_code_is_reproducible_with_seed() {
        let a = random_code(&mut StdRng::seed_from_u64(42), 4, 6);
        let b = random_code(&mut StdRng::seed_from_u64(42), 4, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = PlayGame::new(Code::new(vec![0, 1, 2, 3]), &config());

        let (feedback, status) = game.guess(Code::new(vec![0, 0, 1, 1])).unwrap();
        assert_eq!(feedback, Feedback::new(1, 1));
        assert_eq!(status, GameStatus::Continuing);

        let (feedback, status) = game.guess(Code::new(vec![0, 1, 2, 3])).unwrap();
        assert!(feedback.is_perfect(4));
        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn budget_runs_out() {
        let mut game = PlayGame::new(Code::new(vec![5, 5, 5, 5]), &config());
        for _ in 0..2 {
            assert_eq!(
                game.guess(Code::new(vec![0, 0, 0, 0])).unwrap().1,
                GameStatus::Continuing
            );
        }
        assert_eq!(game.guess(Code::new(vec![1, 1, 1, 1])).unwrap().1, GameStatus::Lost);

        // Still scored, no longer recorded
        let (feedback, status) = game.guess(Code::new(vec![5, 5, 5, 5])).unwrap();
        assert!(feedback.is_perfect(4));
        assert_eq!(status, GameStatus::Lost);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn invalid_guess_is_not_recorded() {
        let mut game = PlayGame::new(Code::new(vec![0, 1, 2, 3]), &config());

        assert!(game.guess(Code::new(vec![0, 1, 2])).is_err());
        assert!(game.guess(Code::new(vec![0, 1, 2, 6])).is_err());
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::Continuing);
    }
}
