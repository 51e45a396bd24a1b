//! Spell-check capability
//!
//! The game only needs to ask "is this a correctly spelled word in this
//! language?". Any dictionary that answers that question can be injected
//! into a [`GameSession`](crate::game::GameSession).

mod word_set;

pub use word_set::WordSet;

use std::fmt;

/// Language tag such as `"en"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// English, the language of the embedded dictionary
    pub const ENGLISH: &'static str = "en";

    /// Create a language tag, lowercased
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_lowercase())
    }

    /// The lowercased tag, e.g. "en"
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new(Self::ENGLISH)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A synchronous, side-effect-free spelling oracle
pub trait SpellChecker {
    /// Check whether `word` is correctly spelled in `language`
    fn is_correctly_spelled(&self, word: &str, language: &Language) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_correctly_spelled(&self, word: &str, language: &Language) -> bool {
        (**self).is_correctly_spelled(word, language)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_correctly_spelled(&self, word: &str, language: &Language) -> bool {
        (**self).is_correctly_spelled(word, language)
    }
}
