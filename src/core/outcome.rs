//! Validation outcomes returned to the caller
//!
//! Rejections are ordinary values with a title and message for display;
//! nothing in the game core fails with an error.

use std::fmt;

/// Result of a submission that was actually validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
    /// The word was added to the accepted list
    Accepted,
    /// The word was refused, state is unchanged
    Rejected(Rejection),
}

/// Why a submitted word was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The word is already in the accepted list
    AlreadyUsed,
    /// The word is the root word itself (only when that rule is enabled)
    SameAsRoot,
    /// The word needs letters the root doesn't have
    NotComposableFromRoot,
    /// The word is too short or the spell checker doesn't know it
    NotARealWord,
}

impl ValidationOutcome {
    /// True if the word was added
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl Rejection {
    /// Short alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word already in use",
            Self::SameAsRoot => "Word is the root",
            Self::NotComposableFromRoot => "Word not in dictionary",
            Self::NotARealWord => "Word is not real",
        }
    }

    /// Alert message, mentioning the root word where it helps
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    ///
    /// let message = Rejection::NotComposableFromRoot.message("garden");
    /// assert_eq!(message, "Try again with a different word from garden");
    /// ```
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::SameAsRoot => format!("Find words hidden inside {root}"),
            Self::NotComposableFromRoot => format!("Try again with a different word from {root}"),
            Self::NotARealWord => "Try again with a different word".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "Accepted"),
            Self::Rejected(reason) => write!(f, "Rejected: {reason}"),
        }
    }
}
