//! Fixed dictionary backed by a word set

use super::{Language, SpellChecker};
use crate::error::{Error, Result};
use crate::wordlists::{DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A fixed set of correctly spelled words in one language
///
/// Lookups are case-insensitive. Words in any other language are never
/// reported as correctly spelled.
#[derive(Debug, Clone)]
pub struct WordSet {
    language: Language,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a dictionary from a list of words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Language, SpellChecker, WordSet};
    ///
    /// let dict = WordSet::from_words(Language::default(), ["grade", "Grand"]);
    /// assert!(dict.is_correctly_spelled("GRAND", &Language::default()));
    /// assert!(!dict.is_correctly_spelled("grnad", &Language::default()));
    /// ```
    pub fn from_words<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| crate::core::normalize(w.as_ref()))
            .collect();
        Self { language, words }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded_english() -> Self {
        Self::from_words(Language::default(), DICTIONARY)
    }

    /// Load a one-word-per-line dictionary file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no words.
    pub fn load<P: AsRef<Path>>(language: Language, path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = loader::load_candidates(path)?;
        if words.is_empty() {
            return Err(Error::EmptyWordList {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            path = %path.display(),
            words = words.len(),
            language = %language,
            "loaded dictionary"
        );
        Ok(Self::from_words(language, words))
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordSet {
    fn is_correctly_spelled(&self, word: &str, language: &Language) -> bool {
        if *language != self.language {
            return false;
        }
        self.words.contains(&word.to_lowercase())
    }
}
