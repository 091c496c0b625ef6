use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Indicates that an error occurred while building the index or picking a starter word.
#[derive(Debug)]
pub enum AnagramError {
    /// Indicates that the word source could not be read. No index is produced.
    BuildFailure(io::Error),
    /// Indicates that no unused starter word exists at the current or any longer word length, up
    /// to [`MAX_WORD_LENGTH`](crate::MAX_WORD_LENGTH).
    NoStarterFound,
}

impl fmt::Display for AnagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnagramError::BuildFailure(io_error) => {
                write!(f, "could not load the word list: {}", io_error)
            }
            AnagramError::NoStarterFound => write!(
                f,
                "no good starter word found, please check the word list and the difficulty"
            ),
        }
    }
}

impl Error for AnagramError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnagramError::BuildFailure(io_error) => Some(io_error),
            AnagramError::NoStarterFound => None,
        }
    }
}

impl From<io::Error> for AnagramError {
    fn from(io_error: io::Error) -> Self {
        AnagramError::BuildFailure(io_error)
    }
}

/// The outcome of a single guess within a round.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum GuessOutcome {
    /// The guess was blank, and was ignored.
    Empty,
    /// The guess was one of the remaining anagrams. Provides the points it earned.
    Correct { points: i64 },
    /// The guess is not a known word, contains the starter word, or was already found.
    Rejected,
}

/// A guess as it was recorded in a round's history.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct GuessRecord {
    /// The normalized (trimmed, lower case) guess.
    pub guess: Box<str>,
    pub accepted: bool,
}

/// What is left once a player gives up on a round.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct RoundSummary {
    pub starter: Arc<str>,
    /// The anagrams the player didn't find, in the order they were discovered.
    pub missed: Vec<Arc<str>>,
    /// The running score, after deducting the length of every missed word.
    pub score: i64,
}
