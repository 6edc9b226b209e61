//! Simple interactive CLI mode
//!
//! The human holds a code and scores the guesses the solver proposes.

use super::get_user_input;
use crate::core::{Code, Feedback};
use crate::output::formatters::{code_to_pegs, feedback_to_pegs};
use crate::solver::{
    CancellationToken, Cancelled, OutcomeSpace, SessionConfig, SessionError, Strategy, Turn,
    filter_by_history, filter_candidates, generate_all_candidates, generate_outcome_space,
    opening_guess,
};
use anyhow::{Result, bail};
use colored::Colorize;

/// Solver state for a game where the feedback comes from outside
///
/// Unlike [`crate::solver::Session`] there is no hidden code: each guess is
/// scored by whoever holds the code, and the history can be rewound.
#[derive(Debug)]
pub struct Assistant {
    config: SessionConfig,
    all_candidates: Vec<Code>,
    outcomes: OutcomeSpace,
    candidates: Vec<Code>,
    history: Vec<Turn>,
    cancel: CancellationToken,
}

impl Assistant {
    /// # Errors
    /// Returns an error if `config` is not a playable board.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let all_candidates = generate_all_candidates(config.holes, config.colors);

        Ok(Self {
            config,
            candidates: all_candidates.clone(),
            all_candidates,
            outcomes: generate_outcome_space(config.holes),
            history: Vec::new(),
            cancel: CancellationToken::new(),
        })
    }

    /// The next guess to play, or `None` once no candidate fits the feedback
    ///
    /// # Errors
    /// Returns `Cancelled` if the strategy search was cancelled.
    pub fn suggest(&self) -> Result<Option<Code>, Cancelled> {
        if self.candidates.is_empty() {
            return Ok(None);
        }
        if self.history.is_empty() {
            return Ok(Some(opening_guess(self.config.holes, self.config.colors)));
        }

        Ok(self
            .config
            .strategy
            .select_guess(&self.candidates, &self.outcomes, &self.cancel)?
            .cloned())
    }

    /// Record the feedback for `guess` and narrow the candidates
    ///
    /// Returns the number of candidates left.
    ///
    /// # Errors
    /// Returns an error if the guess does not fit the board or the feedback
    /// cannot occur on it. Nothing is recorded in that case.
    pub fn record(&mut self, guess: Code, feedback: Feedback) -> Result<usize> {
        guess.validate(self.config.holes, self.config.colors)?;
        if !self.outcomes.contains(feedback) {
            bail!(
                "feedback {feedback} is impossible with {} holes",
                self.config.holes
            );
        }

        self.candidates = filter_candidates(&self.candidates, &guess, feedback);
        self.history.push(Turn { guess, feedback });
        log::debug!(
            "recorded turn {}: {} candidates remain",
            self.history.len(),
            self.candidates.len()
        );

        Ok(self.candidates.len())
    }

    /// Drop the last recorded turn, rebuilding the candidates from what is left
    pub fn undo(&mut self) -> Option<Turn> {
        let turn = self.history.pop()?;
        self.candidates = filter_by_history(&self.all_candidates, &self.history);
        Some(turn)
    }

    /// Forget all turns
    pub fn new_game(&mut self) {
        self.history.clear();
        self.candidates.clone_from(&self.all_candidates);
    }

    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Whether the last recorded feedback was all blacks
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|turn| turn.feedback.is_perfect(self.config.holes))
    }
}

enum Reply {
    Feedback(Feedback),
    Undo,
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the board is not playable or reading input fails.
pub fn run_simple(config: SessionConfig) -> Result<()> {
    let mut assistant = Assistant::new(config)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Mastermind Solver - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Think of {} pegs using colours 0-{}. I'll try to break your code.",
        config.holes,
        config.colors - 1
    );
    println!("After each guess, enter the feedback as 'B W':\n");
    println!("  - B: pegs with the right colour in the right place");
    println!("  - W: pegs with the right colour in the wrong place");
    println!("  - Or type 'win' if I got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    loop {
        let Some(guess) = assistant.suggest()? else {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.to_lowercase().as_str() {
                "undo" | "u" => undo(&mut assistant),
                "new" | "n" => {
                    assistant.new_game();
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        };

        let turn = assistant.history().len() + 1;
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {} candidates remaining",
            assistant.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");
        println!("\n🎯 My guess: {}  ({guess})\n", code_to_pegs(&guess));

        if assistant.candidates().len() <= 10 {
            println!("Remaining candidates:");
            for candidate in assistant.candidates() {
                println!("  • {candidate}");
            }
            println!();
        }

        match read_reply(config.holes)? {
            Reply::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Reply::NewGame => {
                assistant.new_game();
                println!("\n🔄 New game started!\n");
            }
            Reply::Undo => undo(&mut assistant),
            Reply::Feedback(feedback) => {
                if let Err(e) = assistant.record(guess, feedback) {
                    println!("❌ {e}\n");
                    continue;
                }

                if assistant.is_solved() {
                    print_victory(&assistant, config.holes);

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            assistant.new_game();
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                } else if turn >= config.max_turns {
                    println!(
                        "\n{}\n",
                        format!("Out of turns after {turn} guesses.").yellow()
                    );
                }
            }
        }
    }
}

fn read_reply(holes: usize) -> Result<Reply> {
    loop {
        let input = get_user_input("Enter feedback (B W, 'win', or command)")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(Reply::Quit),
            "new" | "n" => return Ok(Reply::NewGame),
            "undo" | "u" => return Ok(Reply::Undo),
            "win" | "correct" | "yes" | "solved" => {
                return Ok(Reply::Feedback(Feedback::perfect(holes)));
            }
            _ => match input.parse::<Feedback>() {
                Ok(feedback) => return Ok(Reply::Feedback(feedback)),
                Err(e) => println!("❌ {e}. Use 'B W', e.g. '1 2'\n"),
            },
        }
    }
}

fn undo(assistant: &mut Assistant) {
    if assistant.undo().is_some() {
        println!(
            "✓ Undone! Back to turn {}\n",
            assistant.history().len() + 1
        );
    } else {
        println!("Nothing to undo!\n");
    }
}

fn print_victory(assistant: &Assistant, holes: usize) {
    let turns = assistant.history().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "          🎉  C O D E   B R O K E N !  🎉          "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, turn) in assistant.history().iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            code_to_pegs(&turn.guess),
            feedback_to_pegs(turn.feedback, holes)
        );
    }
    println!("\n{}\n", "═".repeat(70).bright_cyan());
}
