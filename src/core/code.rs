//! Mastermind code representation
//!
//! A Code is an ordered row of pegs, each peg stored as a small integer symbol
//! in `0..colors`.

use std::fmt;
use std::str::FromStr;

/// A single peg colour
pub type Symbol = u8;

/// Widest board a code (and its feedback counts) can describe
pub const MAX_HOLES: usize = u8::MAX as usize;

/// An ordered sequence of peg symbols
///
/// Codes are immutable values. Ordering is lexicographic by symbol, which is the
/// order the candidate space is generated in and the order used for tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Box<[Symbol]>);

/// Error raised when a code does not fit the board it is used on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    /// The code has the wrong number of pegs
    WrongLength { expected: usize, actual: usize },
    /// A peg uses a symbol outside `0..colors`
    SymbolOutOfRange {
        position: usize,
        symbol: Symbol,
        colors: u8,
    },
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} pegs, got {actual}")
            }
            Self::SymbolOutOfRange {
                position,
                symbol,
                colors,
            } => write!(
                f,
                "Peg {position} has colour {symbol}, expected a colour below {colors}"
            ),
        }
    }
}

impl std::error::Error for InvalidGuess {}

/// Error type for unparseable code strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCodeError {
    Empty,
    InvalidSymbol(String),
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one peg"),
            Self::InvalidSymbol(token) => write!(f, "'{token}' is not a valid colour number"),
        }
    }
}

impl std::error::Error for ParseCodeError {}

impl Code {
    /// Create a code from its symbols without checking them against a board
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new(vec![0, 0, 1, 1]);
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.to_string(), "0 0 1 1");
    /// ```
    pub fn new(symbols: impl Into<Box<[Symbol]>>) -> Self {
        Self(symbols.into())
    }

    /// Create a code and validate it against a `holes` x `colors` board
    ///
    /// # Errors
    /// Returns `InvalidGuess` if the length differs from `holes` or any symbol is
    /// not below `colors`.
    pub fn checked(
        symbols: impl Into<Box<[Symbol]>>,
        holes: usize,
        colors: u8,
    ) -> Result<Self, InvalidGuess> {
        let code = Self::new(symbols);
        code.validate(holes, colors)?;
        Ok(code)
    }

    /// Check that this code fits a `holes` x `colors` board
    ///
    /// # Errors
    /// Returns the first violation found: length is checked before symbols.
    pub fn validate(&self, holes: usize, colors: u8) -> Result<(), InvalidGuess> {
        if self.0.len() != holes {
            return Err(InvalidGuess::WrongLength {
                expected: holes,
                actual: self.0.len(),
            });
        }

        match self
            .0
            .iter()
            .enumerate()
            .find(|&(_, &symbol)| symbol >= colors)
        {
            Some((position, &symbol)) => Err(InvalidGuess::SymbolOutOfRange {
                position,
                symbol,
                colors,
            }),
            None => Ok(()),
        }
    }

    /// Get the pegs as a slice
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.0[position]
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Parse a code from `"0 1 2 3"`, `"0,1,2,3"` or the compact `"0123"`
///
/// The compact form reads one single-digit colour per character.
impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => Err(ParseCodeError::Empty),
            [compact] if compact.len() > 1 && compact.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self::new(
                    compact.bytes().map(|b| b - b'0').collect::<Vec<_>>(),
                ))
            }
            _ => tokens
                .iter()
                .map(|token| {
                    token
                        .parse::<Symbol>()
                        .map_err(|_| ParseCodeError::InvalidSymbol((*token).to_string()))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::new),
        }
    }
}
