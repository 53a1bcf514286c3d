//! The conversational response matcher.
//!
//! [`ResponseMatcher`] bundles a [`SpellChecker`] and a [`Responder`] built
//! from one [`KnowledgeBase`].  It holds only immutable data, so a single
//! instance can be shared freely between threads.

use crate::config::SpellConfig;
use crate::knowledge::KnowledgeBase;
use crate::spell::{self, Dictionary, SpellChecker, Suggestion};

use super::responder::Responder;

/// Spell-checks, corrects and answers user utterances.
///
/// # Example
/// ```rust
/// use lalbot::chat::ResponseMatcher;
///
/// let matcher = ResponseMatcher::builtin();
/// let draft = "I need sofware help";
/// let suggestions = matcher.check_spelling(draft);
/// let fixed = matcher.auto_correct(draft, &suggestions);
/// assert_eq!(fixed, "I need software help");
/// assert!(!matcher.get_response(&fixed).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ResponseMatcher {
    checker: SpellChecker,
    responder: Responder,
}

impl ResponseMatcher {
    pub fn new(kb: &KnowledgeBase, spell: SpellConfig) -> Self {
        Self {
            checker: SpellChecker::new(Dictionary::new(&kb.dictionary), spell),
            responder: Responder::from_knowledge(kb),
        }
    }

    /// Built-in LalNova knowledge with default spelling limits.
    pub fn builtin() -> Self {
        Self::new(&KnowledgeBase::builtin(), SpellConfig::default())
    }

    /// Ranked corrections for a single word.
    pub fn suggest_corrections(&self, word: &str) -> Vec<Suggestion> {
        self.checker.suggest(word)
    }

    /// Corrections for every token of `utterance`, in token order.
    pub fn check_spelling(&self, utterance: &str) -> Vec<Suggestion> {
        self.checker.check_message(utterance)
    }

    /// Apply the high-confidence suggestions (distance up to
    /// `auto_correct_distance`); the rest are left for the user.
    pub fn auto_correct(&self, utterance: &str, suggestions: &[Suggestion]) -> String {
        spell::auto_correct(
            utterance,
            suggestions,
            self.checker.config().auto_correct_distance,
        )
    }

    /// Apply one suggestion the user accepted.
    pub fn apply_suggestion(&self, utterance: &str, suggestion: &Suggestion) -> String {
        spell::apply_suggestion(utterance, suggestion)
    }

    /// Canned response for `utterance`.  Performs no correction.
    pub fn get_response(&self, utterance: &str) -> &str {
        self.responder.respond(utterance)
    }

    /// Label of the category that answers `utterance`.
    pub fn category_for(&self, utterance: &str) -> &str {
        self.responder.label_for(utterance)
    }

    /// Whether `suggestion` would be applied automatically.
    pub fn is_auto_correctable(&self, suggestion: &Suggestion) -> bool {
        (1..=self.checker.config().auto_correct_distance).contains(&suggestion.distance)
    }

    pub fn spell_config(&self) -> &SpellConfig {
        self.checker.config()
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }
}

impl Default for ResponseMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Known and too-short words return no suggestions.
    #[test]
    fn known_and_short_words_short_circuit() {
        let m = ResponseMatcher::builtin();
        assert!(m.suggest_corrections("software").is_empty());
        assert!(m.suggest_corrections("to").is_empty());
    }

    /// The closest dictionary word comes first.
    #[test]
    fn close_match_is_ranked_first() {
        let m = ResponseMatcher::builtin();
        let found = m.suggest_corrections("servces");
        assert_eq!(found[0].word, "services");
        assert_eq!(found[0].distance, 1);
    }

    /// One-edit typos are fixed without asking.
    #[test]
    fn auto_correct_applies_distance_one() {
        let m = ResponseMatcher::builtin();
        let text = "I need sofware help";
        let suggestions = m.check_spelling(text);
        assert_eq!(m.auto_correct(text, &suggestions), "I need software help");
    }

    /// Two-edit typos are reported but need an explicit apply.
    #[test]
    fn auto_correct_leaves_distance_two_for_manual_application() {
        let m = ResponseMatcher::builtin();
        let text = "please sftwre";
        let suggestions = m.check_spelling(text);

        let far = suggestions
            .iter()
            .find(|s| s.original == "sftwre")
            .expect("distance-2 suggestion reported");
        assert_eq!(far.word, "software");
        assert_eq!(far.distance, 2);
        assert!(!m.is_auto_correctable(far));

        assert_eq!(m.auto_correct(text, &suggestions), text);
        assert_eq!(m.apply_suggestion(text, far), "please software");
    }

    /// Re-applying a suggestion leaves the text as it is.
    #[test]
    fn manual_application_is_idempotent() {
        let m = ResponseMatcher::builtin();
        let s = Suggestion {
            original: "emial".into(),
            word: "email".into(),
            distance: 2,
        };
        let once = m.apply_suggestion("my emial is", &s);
        assert_eq!(m.apply_suggestion(&once, &s), once);
    }

    /// Correcting a short word does not touch longer words containing it.
    #[test]
    fn correcting_web_leaves_webbing_alone() {
        let m = ResponseMatcher::builtin();
        let text = "wbe webbing";
        let suggestions = m.check_spelling(text);
        let corrected = suggestions
            .iter()
            .filter(|s| s.original == "wbe")
            .fold(text.to_string(), |acc, s| m.apply_suggestion(&acc, s));
        assert_eq!(corrected, "web webbing");
    }

    /// The earlier category wins when several match.
    #[test]
    fn greeting_beats_pricing() {
        let m = ResponseMatcher::builtin();
        assert_eq!(m.category_for("hello, what are your prices?"), "greeting");
    }

    /// Unmatched text gets the fallback answer.
    #[test]
    fn unknown_text_gets_default_response() {
        let m = ResponseMatcher::builtin();
        let kb = KnowledgeBase::builtin();
        assert_eq!(m.get_response("xyzzy plugh"), kb.default_response);
    }

    /// Empty input yields no suggestions, no change and the fallback answer.
    #[test]
    fn empty_input_is_neutral() {
        let m = ResponseMatcher::builtin();
        assert!(m.check_spelling("").is_empty());
        assert_eq!(m.auto_correct("", &[]), "");
        assert_eq!(m.get_response(""), m.responder().default_response());
    }

    /// Auto-corrected text is what gets classified.
    #[test]
    fn correction_feeds_classification() {
        let m = ResponseMatcher::builtin();
        let text = "what is yuor pricng?";
        let fixed = m.auto_correct(text, &m.check_spelling(text));
        assert_eq!(fixed, "what is yuor pricing?");
        assert_eq!(m.category_for(&fixed), "pricing");
    }

    /// The matcher can be shared across threads.
    #[test]
    fn matcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResponseMatcher>();
    }

    /// A distance-0 suggestion is never treated as an auto-correction.
    #[test]
    fn exact_match_is_not_auto_correctable() {
        let m = ResponseMatcher::builtin();
        let s = Suggestion {
            original: "Software".into(),
            word: "software".into(),
            distance: 0,
        };
        assert!(!m.is_auto_correctable(&s));
        assert_eq!(m.auto_correct("Software rocks", &[s]), "Software rocks");
    }
}
