use crate::data::AnagramIndex;
use crate::results::*;
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

/// The starter word length at the start of a session.
pub const DEFAULT_WORD_LENGTH: usize = 3;

/// The longest starter word length the selector will move up to on its own.
pub const MAX_WORD_LENGTH: usize = 7;

/// Per-game state: the current difficulty (starter word length) and the starter words already
/// served.
///
/// A session never modifies the index, so one index can serve any number of sessions.
pub struct Session<R = StdRng> {
    rng: R,
    word_length: usize,
    used_words: HashSet<Arc<str>>,
}

impl Session<StdRng> {
    /// Creates a new session using a randomly seeded number generator.
    pub fn new() -> Self {
        Session::with_rng(StdRng::from_entropy())
    }

    /// Creates a new session whose starter picks are reproducible for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Session::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Session::new()
    }
}

impl<R: RngCore> Session<R> {
    /// Creates a new session that draws random numbers from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Session {
            rng,
            word_length: DEFAULT_WORD_LENGTH,
            used_words: HashSet::new(),
        }
    }

    /// The length of the next starter word to pick.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Moves to one letter longer starter words. No upper bound is enforced here.
    pub fn increase_difficulty(&mut self) {
        self.word_length += 1;
    }

    /// Moves to one letter shorter starter words, stopping at zero.
    pub fn decrease_difficulty(&mut self) {
        self.word_length = self.word_length.saturating_sub(1);
    }

    /// Forgets all used words and restores the default difficulty.
    pub fn reset(&mut self) {
        self.used_words.clear();
        self.word_length = DEFAULT_WORD_LENGTH;
    }

    /// The starter words that have been served since the last reset.
    pub fn used_words(&self) -> &HashSet<Arc<str>> {
        &self.used_words
    }

    /// Picks a good starter word of the current length that hasn't been used yet, and marks it as
    /// used.
    ///
    /// The search starts just after a random position in the list of starters for this length
    /// and wraps around once. The random position is never the final starter in the list. If
    /// every starter of this length is used, the word length is increased (up to
    /// [`MAX_WORD_LENGTH`]) and the search repeats. Returns [`AnagramError::NoStarterFound`] if
    /// the current length has fewer than two starters, or once no longer length is allowed.
    pub fn pick_good_starter_word(
        &mut self,
        index: &AnagramIndex,
    ) -> Result<Arc<str>, AnagramError> {
        let mut tried_lengths: Vec<usize> = Vec::new();
        loop {
            tried_lengths.push(self.word_length);
            let starters = index.starter_words(self.word_length);
            if starters.len() < 2 {
                warn!(
                    "Not enough starter words of length {} (tried lengths {:?}).",
                    self.word_length, tried_lengths
                );
                return Err(AnagramError::NoStarterFound);
            }

            let start = self.rng.gen_range(0..starters.len() - 1);
            let maybe_unused = starters[start + 1..]
                .iter()
                .chain(starters[..=start].iter())
                .find(|word| !self.used_words.contains(*word));
            if let Some(word) = maybe_unused {
                self.used_words.insert(Arc::clone(word));
                trace!("Picked starter word {}.", word);
                return Ok(Arc::clone(word));
            }

            if self.word_length >= MAX_WORD_LENGTH {
                warn!(
                    "All starter words are used (tried lengths {:?}).",
                    tried_lengths
                );
                return Err(AnagramError::NoStarterFound);
            }
            self.word_length += 1;
            debug!(
                "All starters of length {} are used, trying length {}.",
                self.word_length - 1,
                self.word_length
            );
        }
    }

    /// Picks a starter word and begins a new round with it.
    ///
    /// If a starter has already been served in this session, `harder` first increases the
    /// difficulty. If a starter can't be picked after the first round, the difficulty is lowered
    /// once to undo the attempt.
    pub fn start_round(
        &mut self,
        index: &AnagramIndex,
        harder: bool,
        score: i64,
    ) -> Result<Round, AnagramError> {
        let is_first_round = self.used_words.is_empty();
        if harder && !is_first_round {
            self.increase_difficulty();
        }
        match self.pick_good_starter_word(index) {
            Ok(starter) => Ok(Round::new(index, starter, score)),
            Err(error) => {
                if !is_first_round {
                    self.decrease_difficulty();
                }
                Err(error)
            }
        }
    }
}

/// A single round of the game: find the anagrams of the starter word with one more letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    starter: Arc<str>,
    remaining: Vec<Arc<str>>,
    history: Vec<GuessRecord>,
    score: i64,
}

impl Round {
    /// Starts a round for the given starter word, continuing from the given score.
    pub fn new(index: &AnagramIndex, starter: Arc<str>, score: i64) -> Round {
        Round {
            remaining: index.anagrams_with_one_more_letter(&starter),
            starter,
            history: Vec::new(),
            score,
        }
    }

    pub fn starter(&self) -> &str {
        &self.starter
    }

    /// The anagrams that haven't been found yet.
    pub fn remaining(&self) -> &[Arc<str>] {
        &self.remaining
    }

    /// Every non-blank guess, in the order it was made.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Processes the player's guess.
    ///
    /// A correct guess is removed from the remaining anagrams, and scores one point per letter.
    pub fn guess(&mut self, index: &AnagramIndex, input: &str) -> GuessOutcome {
        let guess = input.trim().to_lowercase();
        if guess.is_empty() {
            return GuessOutcome::Empty;
        }

        let maybe_position = if index.is_good_word(&guess, &self.starter) {
            self.remaining
                .iter()
                .position(|anagram| **anagram == *guess)
        } else {
            None
        };
        let outcome = match maybe_position {
            Some(position) => {
                self.remaining.remove(position);
                let points = guess.chars().count() as i64;
                self.score += points;
                GuessOutcome::Correct { points }
            }
            None => GuessOutcome::Rejected,
        };
        self.history.push(GuessRecord {
            guess: guess.into_boxed_str(),
            accepted: outcome != GuessOutcome::Rejected,
        });
        outcome
    }

    /// Ends the round. Every anagram that wasn't found costs one point per letter.
    pub fn give_up(self) -> RoundSummary {
        let penalty: i64 = self
            .remaining
            .iter()
            .map(|word| word.chars().count() as i64)
            .sum();
        RoundSummary {
            starter: self.starter,
            missed: self.remaining,
            score: self.score - penalty,
        }
    }
}
