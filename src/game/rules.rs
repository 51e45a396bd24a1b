//! Tunable rules for a game session

use crate::dictionary::Language;

/// Rules applied to every submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    /// Words shorter than this are never real words
    pub min_word_length: usize,
    /// Whether the root word itself may be submitted
    pub allow_root_word: bool,
    /// Language passed to the spell checker
    pub language: Language,
}

impl GameRules {
    /// Default minimum word length
    pub const MIN_WORD_LENGTH: usize = 3;

    /// Create rules with the given minimum word length
    ///
    /// The root word is allowed and the language is English.
    #[must_use]
    pub fn new(min_word_length: usize) -> Self {
        Self {
            min_word_length,
            allow_root_word: true,
            language: Language::default(),
        }
    }

    /// Set whether submitting the root word verbatim is allowed
    #[must_use]
    pub fn allow_root_word(mut self, allow: bool) -> Self {
        self.allow_root_word = allow;
        self
    }

    /// Set the spell-check language
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new(Self::MIN_WORD_LENGTH)
    }
}
