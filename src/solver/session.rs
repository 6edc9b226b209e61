//! Game session state machine
//!
//! A Session plays one hidden code at a time: it picks guesses with its
//! strategy, scores them against the hidden code and narrows the candidate set
//! between turns.
//!
//! ```text
//! Init ──take_turn──▶ Guessing ──take_turn──▶ Guessing …
//!                         │                      │
//!                         └──── full match ──────┴──▶ Won
//!                         └──── budget spent ────┴──▶ Lost
//! ```

use super::strategy::{Strategy, StrategyType, opening_guess};
use super::{
    CancellationToken, Cancelled, OutcomeSpace, filter_candidates, generate_all_candidates,
    generate_outcome_space,
};
use crate::core::{Code, Feedback, InvalidGuess, MAX_HOLES};
use std::fmt;

/// Default guess budget per game
pub const DEFAULT_MAX_TURNS: usize = 20;

/// Board dimensions, strategy and guess budget for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub holes: usize,
    pub colors: u8,
    pub strategy: StrategyType,
    pub max_turns: usize,
}

impl SessionConfig {
    /// Create a configuration with the default guess budget
    #[must_use]
    pub const fn new(holes: usize, colors: u8, strategy: StrategyType) -> Self {
        Self {
            holes,
            colors,
            strategy,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check the configuration describes a playable board
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either dimension is zero, the board is wider
    /// than [`MAX_HOLES`] or `colors^holes` does not fit in memory addressing;
    /// `InvalidMaxTurns` if the budget is zero.
    pub fn validate(&self) -> Result<(), SessionError> {
        let enumerable = u32::try_from(self.holes)
            .ok()
            .and_then(|holes| usize::from(self.colors).checked_pow(holes))
            .is_some();

        if self.holes == 0 || self.colors == 0 || self.holes > MAX_HOLES || !enumerable {
            return Err(SessionError::InvalidDimensions {
                holes: self.holes,
                colors: self.colors,
            });
        }
        if self.max_turns == 0 {
            return Err(SessionError::InvalidMaxTurns);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    /// The classic board: 4 holes, 6 colours, minimax
    fn default() -> Self {
        Self::new(4, 6, StrategyType::default())
    }
}

/// One recorded guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No turn taken since construction or the last reset
    Init,
    /// At least one turn taken, game still running
    Guessing,
    /// The last guess matched the hidden code
    Won,
    /// The guess budget ran out
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Game status reported after each turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Continuing,
    Won,
    Lost,
}

/// Result of a single turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub guess: Code,
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// Errors from constructing or playing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidDimensions { holes: usize, colors: u8 },
    InvalidMaxTurns,
    InvalidGuess(InvalidGuess),
    HiddenCodeNotSet,
    GameOver(SessionState),
    Cancelled,
    NoCandidates,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { holes, colors } => {
                write!(f, "Cannot play {holes} holes with {colors} colours")
            }
            Self::InvalidMaxTurns => write!(f, "Guess budget must be at least 1"),
            Self::InvalidGuess(e) => write!(f, "Invalid hidden code: {e}"),
            Self::HiddenCodeNotSet => write!(f, "No hidden code has been set"),
            Self::GameOver(state) => write!(f, "Game is already over ({state:?})"),
            Self::Cancelled => write!(f, "Guess search was cancelled"),
            Self::NoCandidates => write!(f, "No candidates remain"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidGuess> for SessionError {
    fn from(e: InvalidGuess) -> Self {
        Self::InvalidGuess(e)
    }
}

impl From<Cancelled> for SessionError {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}

/// One Mastermind game against a hidden code
///
/// The full candidate set and outcome space are computed once at construction
/// and reused across resets.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::{GameStatus, Session, SessionConfig, StrategyType};
///
/// let config = SessionConfig::new(4, 6, StrategyType::default());
/// let mut session = Session::new(config).unwrap();
/// session.set_hidden_code(Code::new(vec![0, 1, 2, 3])).unwrap();
///
/// let first = session.take_turn().unwrap();
/// assert_eq!(first.guess.to_string(), "0 0 1 1");
/// assert_eq!(first.feedback.to_string(), "1/1");
///
/// assert_eq!(session.play_out().unwrap(), GameStatus::Won);
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    all_candidates: Vec<Code>,
    outcomes: OutcomeSpace,
    candidates: Vec<Code>,
    turns: Vec<Turn>,
    hidden_code: Option<Code>,
    state: SessionState,
    cancel: CancellationToken,
}

impl Session {
    /// Create a session in the `Init` state
    ///
    /// # Errors
    /// Returns an error if `config` fails [`SessionConfig::validate`].
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let all_candidates = generate_all_candidates(config.holes, config.colors);
        let outcomes = generate_outcome_space(config.holes);
        log::debug!(
            "new session: {} holes, {} colours, {}, {} candidates",
            config.holes,
            config.colors,
            config.strategy.name(),
            all_candidates.len()
        );

        Ok(Self {
            config,
            candidates: all_candidates.clone(),
            all_candidates,
            outcomes,
            turns: Vec::with_capacity(config.max_turns.min(DEFAULT_MAX_TURNS)),
            hidden_code: None,
            state: SessionState::Init,
            cancel: CancellationToken::new(),
        })
    }

    /// Set the code the session is trying to break
    ///
    /// The previous hidden code is kept if validation fails.
    ///
    /// # Errors
    /// Returns `InvalidGuess` if the code does not fit the board.
    pub fn set_hidden_code(&mut self, code: Code) -> Result<(), InvalidGuess> {
        code.validate(self.config.holes, self.config.colors)?;
        self.hidden_code = Some(code);
        Ok(())
    }

    /// Make the next guess and score it against the hidden code
    ///
    /// The first guess is the fixed opening; later guesses come from the strategy
    /// after narrowing the candidates with the previous turn. If the search is
    /// cancelled the session is left exactly as it was.
    ///
    /// # Errors
    /// - `GameOver` if the game already ended
    /// - `HiddenCodeNotSet` if no hidden code was supplied
    /// - `Cancelled` if the cancellation token was triggered
    /// - `NoCandidates` if the candidates were exhausted
    pub fn take_turn(&mut self) -> Result<TurnOutcome, SessionError> {
        if self.state.is_finished() {
            return Err(SessionError::GameOver(self.state));
        }
        let hidden = self
            .hidden_code
            .as_ref()
            .ok_or(SessionError::HiddenCodeNotSet)?;

        let (guess, narrowed) = match self.turns.last() {
            None => (opening_guess(self.config.holes, self.config.colors), None),
            Some(last) => {
                let remaining = filter_candidates(&self.candidates, &last.guess, last.feedback);
                let guess = self
                    .config
                    .strategy
                    .select_guess(&remaining, &self.outcomes, &self.cancel)?
                    .ok_or(SessionError::NoCandidates)?
                    .clone();
                (guess, Some(remaining))
            }
        };
        let feedback = Feedback::calculate(&guess, hidden);

        if let Some(remaining) = narrowed {
            self.candidates = remaining;
        }
        self.turns.push(Turn {
            guess: guess.clone(),
            feedback,
        });

        let status = if feedback.is_perfect(self.config.holes) {
            self.state = SessionState::Won;
            GameStatus::Won
        } else if self.turns.len() >= self.config.max_turns {
            self.state = SessionState::Lost;
            GameStatus::Lost
        } else {
            self.state = SessionState::Guessing;
            GameStatus::Continuing
        };

        log::debug!(
            "turn {}: {guess} -> {feedback} ({} candidates) {status:?}",
            self.turns.len(),
            self.candidates.len()
        );

        Ok(TurnOutcome {
            guess,
            feedback,
            status,
        })
    }

    /// Take turns until the game is won or lost
    ///
    /// # Errors
    /// Propagates the first error from [`Session::take_turn`].
    pub fn play_out(&mut self) -> Result<GameStatus, SessionError> {
        loop {
            let outcome = self.take_turn()?;
            if outcome.status != GameStatus::Continuing {
                return Ok(outcome.status);
            }
        }
    }

    /// Return to `Init`: full candidate set, no turns, no hidden code
    ///
    /// Also re-arms the cancellation token.
    pub fn reset(&mut self) {
        self.candidates.clone_from(&self.all_candidates);
        self.turns.clear();
        self.hidden_code = None;
        self.state = SessionState::Init;
        self.cancel.clear();
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Candidates the most recent guess was chosen from
    ///
    /// Narrowing by the most recent feedback happens at the start of the next turn.
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Every code on the board, in ascending order
    #[must_use]
    pub fn all_candidates(&self) -> &[Code] {
        &self.all_candidates
    }

    #[must_use]
    pub const fn outcomes(&self) -> &OutcomeSpace {
        &self.outcomes
    }

    /// A handle that cancels this session's guess searches from another thread
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
