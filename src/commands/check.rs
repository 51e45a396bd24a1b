//! Batch word checking
//!
//! Runs a list of words through a fresh round and reports each outcome.

use crate::core::{RootWord, ValidationOutcome, normalize};
use crate::dictionary::SpellChecker;
use crate::game::GameSession;

/// A single checked word
pub struct CheckRow {
    pub word: String,
    pub outcome: Option<ValidationOutcome>,
}

/// Result of checking a batch of words against one root word
pub struct CheckResult {
    pub root: RootWord,
    pub rows: Vec<CheckRow>,
}

impl CheckResult {
    /// Number of words that were accepted
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.outcome.is_some_and(ValidationOutcome::is_accepted))
            .count()
    }
}

/// Check `words` in order against `root`
///
/// Starts a new round on `session`, so earlier words count as used for
/// later ones exactly as in a real game. A blank root falls back to the
/// default root word.
///
/// # Examples
/// ```
/// use word_scramble::commands::check_words;
/// use word_scramble::dictionary::WordSet;
/// use word_scramble::game::GameSession;
///
/// let mut session = GameSession::new(WordSet::embedded_english());
/// let result = check_words(&mut session, "garden", &["grade", "grade", "ragged"]);
/// assert_eq!(result.accepted_count(), 1);
/// ```
pub fn check_words<D, S>(session: &mut GameSession<D>, root: &str, words: &[S]) -> CheckResult
where
    D: SpellChecker,
    S: AsRef<str>,
{
    let root = session.start_new_round([root]).clone();

    let rows = words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            CheckRow {
                word: normalize(word).unwrap_or_default(),
                outcome: session.submit_word(word),
            }
        })
        .collect();

    CheckResult { root, rows }
}
