//! Game session: one round of Word Scramble at a time

use super::GameRules;
use crate::core::{LetterPool, Rejection, RootWord, ValidationOutcome, normalize};
use crate::dictionary::SpellChecker;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A single player's game
///
/// Holds the current root word and the accepted words, most recent first.
/// A session is always in a round: it starts with the fallback root word
/// until [`start_new_round`](Self::start_new_round) picks another one.
///
/// # Examples
/// ```
/// use word_scramble::core::{Rejection, ValidationOutcome};
/// use word_scramble::dictionary::{Language, WordSet};
/// use word_scramble::game::GameSession;
///
/// let dictionary = WordSet::from_words(Language::default(), ["grade", "ragged"]);
/// let mut session = GameSession::new(dictionary);
/// session.start_new_round(["garden"]);
///
/// assert_eq!(
///     session.submit_word("ragged"),
///     Some(ValidationOutcome::Rejected(Rejection::NotComposableFromRoot))
/// );
/// assert_eq!(session.submit_word("Grade"), Some(ValidationOutcome::Accepted));
/// assert_eq!(session.accepted_words(), ["grade"]);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<D> {
    root: RootWord,
    letters: LetterPool,
    accepted: Vec<String>,
    rules: GameRules,
    checker: D,
}

impl<D: SpellChecker> GameSession<D> {
    /// Create a session with default rules
    pub fn new(checker: D) -> Self {
        Self::with_rules(checker, GameRules::default())
    }

    /// Create a session with custom rules
    pub fn with_rules(checker: D, rules: GameRules) -> Self {
        let root = RootWord::fallback();
        Self {
            letters: LetterPool::new(root.text()),
            root,
            accepted: Vec::new(),
            rules,
            checker,
        }
    }

    /// Start a new round with a root word picked at random from `candidates`
    ///
    /// Blank candidates are ignored. If nothing is left the fallback root
    /// word is used, so this never fails.
    pub fn start_new_round<I, S>(&mut self, candidates: I) -> &RootWord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.start_new_round_with_rng(candidates, &mut rand::rng())
    }

    /// Same as [`start_new_round`](Self::start_new_round) with a caller-supplied RNG
    pub fn start_new_round_with_rng<I, S, R>(&mut self, candidates: I, rng: &mut R) -> &RootWord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let roots: Vec<RootWord> = candidates
            .into_iter()
            .filter_map(|candidate| RootWord::new(candidate.as_ref()))
            .collect();

        let root = roots.choose(rng).cloned().unwrap_or_else(|| {
            tracing::warn!(
                fallback = %RootWord::fallback(),
                "no root word candidates, using fallback"
            );
            RootWord::fallback()
        });

        self.start_round_with(root)
    }

    /// Start a new round with a specific root word
    pub fn start_round_with(&mut self, root: RootWord) -> &RootWord {
        tracing::info!(root = %root, "new round");
        self.letters = LetterPool::new(root.text());
        self.root = root;
        self.accepted.clear();
        &self.root
    }

    /// Submit raw player input
    ///
    /// Input is trimmed and lowercased first. Returns `None` if nothing is
    /// left, in which case the session is untouched. Otherwise the word is
    /// validated and, when accepted, inserted at the front of the accepted words.
    pub fn submit_word(&mut self, raw: &str) -> Option<ValidationOutcome> {
        let word = normalize(raw)?;
        let outcome = self.validate(&word);

        tracing::debug!(word = %word, root = %self.root, %outcome, "validated submission");

        if outcome.is_accepted() {
            self.accepted.insert(0, word);
        }
        Some(outcome)
    }

    /// Validate a normalized word without changing the session
    ///
    /// Checks run in order and the first failure wins.
    #[must_use]
    pub fn validate(&self, word: &str) -> ValidationOutcome {
        let rejection = if !self.is_original(word) {
            Some(Rejection::AlreadyUsed)
        } else if !self.rules.allow_root_word && self.is_root(word) {
            Some(Rejection::SameAsRoot)
        } else if !self.is_possible(word) {
            Some(Rejection::NotComposableFromRoot)
        } else if !self.is_real(word) {
            Some(Rejection::NotARealWord)
        } else {
            None
        };

        rejection.map_or(ValidationOutcome::Accepted, ValidationOutcome::Rejected)
    }

    /// Check the word hasn't been accepted already this round
    #[must_use]
    pub fn is_original(&self, word: &str) -> bool {
        !self.accepted.iter().any(|used| used == word)
    }

    /// Check the word can be spelled from the root word's letters
    #[must_use]
    pub fn is_possible(&self, word: &str) -> bool {
        self.letters.can_spell(word)
    }

    /// Check the word is long enough and correctly spelled
    #[must_use]
    pub fn is_real(&self, word: &str) -> bool {
        word.chars().count() >= self.rules.min_word_length
            && self
                .checker
                .is_correctly_spelled(word, &self.rules.language)
    }

    /// Check the word is the root word itself
    #[must_use]
    pub fn is_root(&self, word: &str) -> bool {
        word == self.root.text()
    }
}

impl<D> GameSession<D> {
    /// The current round's root word
    #[inline]
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }

    /// Rules this session validates with
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Number of accepted words this round
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// True before any word is accepted this round
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Total letters across all accepted words
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.accepted.iter().map(|w| w.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Language, WordSet};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Spell checker that knows every word
    struct Everything;

    impl SpellChecker for Everything {
        fn is_correctly_spelled(&self, _word: &str, _language: &Language) -> bool {
            true
        }
    }

    fn dictionary(words: &[&str]) -> WordSet {
        WordSet::from_words(Language::default(), words)
    }

    fn session_with_root<D: SpellChecker>(checker: D, root: &str) -> GameSession<D> {
        let mut session = GameSession::new(checker);
        session.start_round_with(RootWord::new(root).unwrap());
        session
    }

    fn rejected(reason: Rejection) -> Option<ValidationOutcome> {
        Some(ValidationOutcome::Rejected(reason))
    }

    #[test]
    fn new_session_is_in_round_with_fallback() {
        let session = GameSession::new(Everything);
        assert_eq!(session.root_word().text(), "silkworm");
        assert!(session.is_empty());
    }

    #[test]
    fn submit_before_start_uses_fallback_root() {
        let mut session = GameSession::new(Everything);
        assert_eq!(session.submit_word("silk"), Some(ValidationOutcome::Accepted));
    }

    #[test]
    fn start_new_round_picks_a_candidate() {
        let mut session = GameSession::new(Everything);
        let candidates = ["garden", "anteater", "backpack"];
        let root = session.start_new_round(candidates).text().to_string();
        assert!(candidates.contains(&root.as_str()));
    }

    #[test]
    fn start_new_round_with_seeded_rng_is_deterministic() {
        let candidates = ["garden", "anteater", "backpack", "silkworm"];

        let mut first = GameSession::new(Everything);
        let mut second = GameSession::new(Everything);
        let a = first
            .start_new_round_with_rng(candidates, &mut StdRng::seed_from_u64(7))
            .clone();
        let b = second
            .start_new_round_with_rng(candidates, &mut StdRng::seed_from_u64(7))
            .clone();
        assert_eq!(a, b);
    }

    #[test]
    fn start_new_round_empty_uses_fallback() {
        let mut session = GameSession::new(Everything);
        let empty: [&str; 0] = [];
        assert_eq!(session.start_new_round(empty).text(), "silkworm");
    }

    #[test]
    fn start_new_round_only_blank_uses_fallback() {
        let mut session = GameSession::new(Everything);
        assert_eq!(session.start_new_round(["", "  ", "\t"]).text(), "silkworm");
    }

    #[test]
    fn start_new_round_never_picks_blank() {
        let mut session = GameSession::new(Everything);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let root = session.start_new_round_with_rng(["", "garden", "   "], &mut rng);
            assert_eq!(root.text(), "garden");
        }
    }

    #[test]
    fn start_new_round_normalizes_candidate() {
        let mut session = GameSession::new(Everything);
        assert_eq!(session.start_new_round(["  GARDEN "]).text(), "garden");
    }

    #[test]
    fn start_new_round_clears_accepted_words() {
        let mut session = session_with_root(Everything, "silkworm");
        session.submit_word("silk");
        session.submit_word("worm");
        assert_eq!(session.len(), 2);

        session.start_new_round(["garden"]);
        assert!(session.accepted_words().is_empty());
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut session = session_with_root(Everything, "silkworm");
        session.submit_word("silk");

        assert_eq!(session.submit_word(""), None);
        assert_eq!(session.submit_word("   \n"), None);
        assert_eq!(session.accepted_words(), ["silk"]);
    }

    #[test]
    fn accepted_words_most_recent_first() {
        let mut session = session_with_root(Everything, "silkworm");
        session.submit_word("silk");
        session.submit_word("worm");
        session.submit_word("milk");
        assert_eq!(session.accepted_words(), ["milk", "worm", "silk"]);
    }

    #[test]
    fn submission_is_normalized() {
        let mut session = session_with_root(Everything, "silkworm");
        assert_eq!(session.submit_word("  SiLk \n"), Some(ValidationOutcome::Accepted));
        assert_eq!(session.accepted_words(), ["silk"]);
    }

    #[test]
    fn resubmission_is_already_used_in_any_case() {
        let mut session = session_with_root(Everything, "silkworm");
        assert_eq!(session.submit_word("silk"), Some(ValidationOutcome::Accepted));
        assert_eq!(session.submit_word("silk"), rejected(Rejection::AlreadyUsed));
        assert_eq!(session.submit_word("SILK"), rejected(Rejection::AlreadyUsed));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn composability_respects_multiplicity() {
        let mut session = session_with_root(Everything, "silkworm");
        assert!(session.is_possible("silk"));
        assert!(!session.is_possible("silkk"));
        assert_eq!(
            session.submit_word("silkk"),
            rejected(Rejection::NotComposableFromRoot)
        );
    }

    #[test]
    fn new_round_forgets_used_words() {
        let mut session = session_with_root(Everything, "silkworm");
        session.submit_word("silk");
        session.start_new_round(["garden"]);
        // A fresh round forgets "silk", so it now fails on letters instead
        assert_eq!(
            session.submit_word("silk"),
            rejected(Rejection::NotComposableFromRoot)
        );
    }

    #[test]
    fn two_letter_word_is_not_real() {
        let mut session = session_with_root(dictionary(&["so", "sow"]), "silkworm");
        assert!(session.is_possible("so"));
        assert_eq!(session.submit_word("so"), rejected(Rejection::NotARealWord));
        assert_eq!(session.submit_word("sow"), Some(ValidationOutcome::Accepted));
    }

    #[test]
    fn unknown_word_is_not_real() {
        let mut session = session_with_root(dictionary(&["silk"]), "silkworm");
        assert_eq!(session.submit_word("klis"), rejected(Rejection::NotARealWord));
        assert!(session.is_empty());
    }

    #[test]
    fn custom_min_length() {
        let mut session = GameSession::with_rules(Everything, GameRules::new(5));
        assert_eq!(session.submit_word("silk"), rejected(Rejection::NotARealWord));
        assert_eq!(session.submit_word("works"), Some(ValidationOutcome::Accepted));
    }

    #[test]
    fn language_is_passed_to_checker() {
        let rules = GameRules::default().language(Language::new("fr"));
        let mut session = GameSession::with_rules(dictionary(&["silk"]), rules);
        assert_eq!(session.submit_word("silk"), rejected(Rejection::NotARealWord));
    }

    #[test]
    fn root_word_accepted_by_default() {
        let mut session = session_with_root(dictionary(&["garden"]), "garden");
        assert_eq!(session.submit_word("garden"), Some(ValidationOutcome::Accepted));
    }

    #[test]
    fn root_word_rejected_when_rule_enabled() {
        let rules = GameRules::default().allow_root_word(false);
        let mut session = GameSession::with_rules(dictionary(&["garden", "grade"]), rules);
        session.start_new_round(["garden"]);

        assert_eq!(session.submit_word("Garden"), rejected(Rejection::SameAsRoot));
        assert_eq!(session.submit_word("grade"), Some(ValidationOutcome::Accepted));
    }

    #[test]
    fn garden_round() {
        let mut session = session_with_root(dictionary(&["grade", "ragged"]), "garden");

        assert_eq!(
            session.submit_word("ragged"),
            rejected(Rejection::NotComposableFromRoot)
        );
        assert_eq!(session.submit_word("grade"), Some(ValidationOutcome::Accepted));
        assert_eq!(session.accepted_words(), ["grade"]);
        assert_eq!(session.submit_word("grade"), rejected(Rejection::AlreadyUsed));
        assert_eq!(session.accepted_words(), ["grade"]);
    }

    #[test]
    fn letter_count_sums_accepted_words() {
        let mut session = session_with_root(Everything, "silkworm");
        session.submit_word("silk");
        session.submit_word("worm");
        session.submit_word("owl");
        assert_eq!(session.letter_count(), 11);
    }

    #[test]
    fn validate_does_not_mutate() {
        let session = session_with_root(Everything, "silkworm");
        assert!(session.validate("silk").is_accepted());
        assert!(session.is_empty());
    }

    proptest! {
        #[test]
        fn root_is_never_empty(candidates in prop::collection::vec("[a-z \t]{0,10}", 0..8)) {
            let mut session = GameSession::new(Everything);
            let root = session.start_new_round(&candidates);
            prop_assert!(!root.text().is_empty());
            prop_assert_eq!(root.text().trim(), root.text());
        }

        #[test]
        fn accepted_words_change_only_on_acceptance(
            submissions in prop::collection::vec("[silkwormSILK ]{0,6}", 0..24)
        ) {
            let mut session = session_with_root(Everything, "silkworm");

            for raw in &submissions {
                let before = session.accepted_words().to_vec();
                let outcome = session.submit_word(raw);

                if outcome == Some(ValidationOutcome::Accepted) {
                    let expected = normalize(raw).unwrap();
                    prop_assert_eq!(session.len(), before.len() + 1);
                    prop_assert_eq!(&session.accepted_words()[0], &expected);
                    prop_assert_eq!(&session.accepted_words()[1..], &before[..]);
                } else {
                    prop_assert_eq!(session.accepted_words(), &before[..]);
                }
            }

            for word in session.accepted_words() {
                prop_assert!(LetterPool::new("silkworm").can_spell(word));
                prop_assert!(word.chars().count() >= 3);
            }
        }

        #[test]
        fn resubmission_in_any_case_is_already_used(mask in prop::collection::vec(any::<bool>(), 4)) {
            let mut session = session_with_root(Everything, "silkworm");
            prop_assert_eq!(session.submit_word("silk"), Some(ValidationOutcome::Accepted));

            let variant: String = "silk"
                .chars()
                .zip(&mask)
                .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(session.submit_word(&variant), rejected(Rejection::AlreadyUsed));
            prop_assert_eq!(session.len(), 1);
        }
    }
}
