//! Core domain types for Word Scramble
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod letters;
mod outcome;
mod word;

pub use letters::LetterPool;
pub use outcome::{Rejection, ValidationOutcome};
pub use word::{FALLBACK_ROOT_WORD, RootWord, normalize};
