use crate::results::AnagramError;
use log::debug;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io;
use std::io::BufRead;
use std::ops::RangeInclusive;
use std::result::Result;
use std::sync::Arc;

/// A word is only a good starter if it has more than this many anagrams with one more letter.
pub const MIN_NUM_ANAGRAMS: usize = 5;

/// The letters that may be added to a word when searching for anagrams with one more letter.
pub const EXTENSION_LETTERS: RangeInclusive<char> = 'a'..='z';

/// Returns the canonical key for the given word: its letters sorted in ascending order.
///
/// Two words are anagrams of each other iff their keys are equal.
pub fn canonicalize(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Indexes every known word by its anagram class, and tracks which words make good starters.
///
/// The index is built once, and is read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnagramIndex {
    words: HashSet<Arc<str>>,
    /// Words grouped by canonical key, in the order they were read.
    groups: HashMap<String, Vec<Arc<str>>>,
    /// Good starter words grouped by length, in the order they were read.
    starters_by_length: HashMap<usize, Vec<Arc<str>>>,
}

impl AnagramIndex {
    /// Constructs a new `AnagramIndex` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped. If any line fails to be read, no index is returned.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, AnagramError> {
        let index = word_reader.lines().try_fold(
            AnagramIndex::default(),
            |mut index, maybe_word| -> io::Result<AnagramIndex> {
                index.ingest(&maybe_word?);
                Ok(index)
            },
        )?;
        index.log_summary();
        Ok(index)
    }

    /// Constructs a new `AnagramIndex` using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to lower case, and blank words are skipped.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let index = words
            .into_iter()
            .fold(AnagramIndex::default(), |mut index, word| {
                index.ingest(word.as_ref());
                index
            });
        index.log_summary();
        index
    }

    /// Adds a single word to the index.
    ///
    /// Whether the word is a good starter is decided against the words read so far, not against
    /// the complete word list.
    fn ingest(&mut self, raw_word: &str) {
        let word = raw_word.trim();
        if word.is_empty() {
            return;
        }
        let word: Arc<str> = Arc::from(word.to_lowercase().as_str());
        self.words.insert(Arc::clone(&word));
        self.groups
            .entry(canonicalize(&word))
            .or_default()
            .push(Arc::clone(&word));

        if self.anagrams_with_one_more_letter(&word).len() > MIN_NUM_ANAGRAMS {
            self.starters_by_length
                .entry(word.chars().count())
                .or_default()
                .push(word);
        }
    }

    fn log_summary(&self) {
        let mut lengths: Vec<usize> = self.starters_by_length.keys().copied().collect();
        lengths.sort_unstable();
        debug!(
            "Built anagram index with {} words in {} groups. Starters per length: {:?}",
            self.words.len(),
            self.groups.len(),
            lengths
                .iter()
                .map(|length| (*length, self.starters_by_length[length].len()))
                .collect::<Vec<(usize, usize)>>()
        );
    }

    /// Returns `true` iff `word` is a known word that does not contain `base`.
    pub fn is_good_word(&self, word: &str, base: &str) -> bool {
        !word.contains(base) && self.words.contains(word)
    }

    /// Returns the known anagrams of `word` followed by each letter from `a` to `z`, skipping
    /// any anagram that contains `word` itself.
    ///
    /// Results are ordered by the added letter, then by the order words were read. A word that
    /// was read more than once is returned more than once.
    pub fn anagrams_with_one_more_letter(&self, word: &str) -> Vec<Arc<str>> {
        let mut extended = String::with_capacity(word.len() + 1);
        let mut result = Vec::new();
        for letter in EXTENSION_LETTERS {
            extended.clear();
            extended.push_str(word);
            extended.push(letter);
            if let Some(anagrams) = self.anagrams_of(&extended) {
                result.extend(
                    anagrams
                        .iter()
                        .filter(|anagram| !anagram.contains(word))
                        .map(Arc::clone),
                );
            }
        }
        result
    }

    /// Returns every known word that is an anagram of `word`, including `word` itself if known.
    pub fn anagrams_of(&self, word: &str) -> Option<&[Arc<str>]> {
        self.groups.get(&canonicalize(word)).map(Vec::as_slice)
    }

    /// Returns the good starter words with the given number of letters.
    pub fn starter_words(&self, word_length: usize) -> &[Arc<str>] {
        self.starters_by_length
            .get(&word_length)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` iff the word is in the index.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of distinct known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` iff no words were read.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of distinct anagram classes.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }
}


#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use test::Bencher;

    #[bench]
    fn bench_canonicalize(b: &mut Bencher) {
        b.iter(|| canonicalize(test::black_box("anagrams")));
    }
}
