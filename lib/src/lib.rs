#![cfg_attr(feature = "unstable", feature(test))]

//! A word-game engine for anagrams with one more letter.
//!
//! An [`AnagramIndex`] is built once from a word list. A [`Session`] then picks starter words
//! from it, and each [`Round`] tracks the player's progress in finding the starter's anagrams.

mod data;
mod engine;
mod results;

pub use data::canonicalize;
pub use data::AnagramIndex;
pub use data::EXTENSION_LETTERS;
pub use data::MIN_NUM_ANAGRAMS;
pub use engine::*;
pub use results::*;
