//! Word list loading utilities
//!
//! Provides functions to load candidate lists from files or use embedded constants.

use super::START_WORDS;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Split text into candidates, one per line
///
/// Lines are trimmed and blank lines are skipped.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::candidates_from_str;
///
/// let words = candidates_from_str("garden\n\n  silkworm  \n");
/// assert_eq!(words, vec!["garden", "silkworm"]);
/// ```
#[must_use]
pub fn candidates_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load candidates from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_candidates;
///
/// let words = load_candidates("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(candidates_from_str(&content))
}

/// Convert embedded string slice to owned candidates
#[must_use]
pub fn candidates_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load candidates from `path`, falling back to the embedded start words
///
/// An unreadable or empty file is logged and replaced by the embedded list,
/// so a game can always be started.
pub fn load_or_embedded<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    match load_candidates(path) {
        Ok(words) if !words.is_empty() => {
            tracing::info!(path = %path.display(), words = words.len(), "loaded word list");
            words
        }
        Ok(_) => {
            tracing::warn!(path = %path.display(), "word list is empty, using embedded list");
            candidates_from_slice(START_WORDS)
        }
        Err(err) => {
            tracing::warn!(error = %err, "using embedded word list");
            candidates_from_slice(START_WORDS)
        }
    }
}
