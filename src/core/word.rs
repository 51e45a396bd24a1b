//! Word normalization and the root word of a round

use std::fmt;

/// Root word used when no candidate list is available
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Normalize raw player input for comparison
///
/// Trims surrounding whitespace and lowercases. Returns `None` when nothing
/// is left, which callers treat as "no submission".
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Grade\n").as_deref(), Some("grade"));
/// assert_eq!(normalize("   "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// The word a round is built around
///
/// Always non-empty and lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

impl RootWord {
    /// Create a root word from a candidate line
    ///
    /// Returns `None` for blank candidates, so a blank line can never become the root.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" Garden ").unwrap();
    /// assert_eq!(root.text(), "garden");
    /// assert!(RootWord::new("\t").is_none());
    /// ```
    #[must_use]
    pub fn new(candidate: &str) -> Option<Self> {
        normalize(candidate).map(Self)
    }

    /// The fallback root word
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_ROOT_WORD.to_string())
    }

    /// Get the root word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters in the root word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always `false`; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for RootWord {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
