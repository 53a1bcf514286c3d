//! Keyword-based FAQ classification.
//!
//! [`Responder`] lowercases an utterance and walks its category table in
//! order; the first category owning a keyword that occurs anywhere in the
//! utterance supplies the answer.

use crate::knowledge::CategoryEntry;

/// Label reported when no category matched.
pub const DEFAULT_LABEL: &str = "default";

/// Picks a canned response for an utterance.
///
/// # Example
/// ```rust
/// use lalbot::chat::Responder;
/// use lalbot::knowledge::KnowledgeBase;
///
/// let responder = Responder::from_knowledge(&KnowledgeBase::builtin());
/// assert_eq!(responder.label_for("How much does it cost?"), "pricing");
/// assert_eq!(responder.label_for("xyzzy plugh"), "default");
/// ```
#[derive(Debug, Clone)]
pub struct Responder {
    categories: Vec<CategoryEntry>,
    default_response: String,
}

impl Responder {
    /// Build from an ordered category table.  Keywords are lowercased so the
    /// comparison is case-insensitive.
    pub fn new(categories: Vec<CategoryEntry>, default_response: impl Into<String>) -> Self {
        let categories = categories
            .into_iter()
            .map(|mut c| {
                c.keywords = c.keywords.iter().map(|k| k.to_lowercase()).collect();
                c
            })
            .collect();
        Self {
            categories,
            default_response: default_response.into(),
        }
    }

    pub fn from_knowledge(kb: &crate::knowledge::KnowledgeBase) -> Self {
        Self::new(kb.categories.clone(), kb.default_response.clone())
    }

    /// The first category with a keyword contained in `utterance`, if any.
    pub fn classify(&self, utterance: &str) -> Option<&CategoryEntry> {
        let message = utterance.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.keywords.iter().any(|kw| message.contains(kw.as_str())))
    }

    /// Category label for `utterance`, or [`DEFAULT_LABEL`].
    pub fn label_for(&self, utterance: &str) -> &str {
        self.classify(utterance)
            .map_or(DEFAULT_LABEL, |c| c.label.as_str())
    }

    /// Canned answer for `utterance`; the default response when nothing
    /// matches.
    pub fn respond(&self, utterance: &str) -> &str {
        self.classify(utterance)
            .map_or(self.default_response.as_str(), |c| c.response.as_str())
    }

    pub fn default_response(&self) -> &str {
        &self.default_response
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    fn builtin() -> (Responder, KnowledgeBase) {
        let kb = KnowledgeBase::builtin();
        (Responder::from_knowledge(&kb), kb)
    }

    fn response_of<'a>(kb: &'a KnowledgeBase, label: &str) -> &'a str {
        &kb.categories
            .iter()
            .find(|c| c.label == label)
            .expect("category exists")
            .response
    }

    /// A message matching several categories gets the first one's answer.
    #[test]
    fn first_category_wins() {
        let (r, kb) = builtin();
        assert_eq!(
            r.respond("hello, what are your prices?"),
            response_of(&kb, "greeting")
        );
    }

    /// Unmatched text classifies as nothing and gets the fallback.
    #[test]
    fn falls_back_to_default() {
        let (r, kb) = builtin();
        assert_eq!(r.respond("xyzzy plugh"), kb.default_response);
        assert!(r.classify("xyzzy plugh").is_none());
    }

    /// Empty text carries the fallback label.
    #[test]
    fn empty_utterance_gets_default() {
        let (r, kb) = builtin();
        assert_eq!(r.respond(""), kb.default_response);
        assert_eq!(r.label_for(""), DEFAULT_LABEL);
    }

    /// Keywords match regardless of case.
    #[test]
    fn case_insensitive_match() {
        let (r, _) = builtin();
        assert_eq!(r.label_for("PORTFOLIO please"), "projects");
        assert_eq!(r.label_for("Get In Touch"), "contact");
    }

    /// Keywords with spaces match as phrases.
    #[test]
    fn multi_word_keywords() {
        let (r, _) = builtin();
        assert_eq!(r.label_for("More than 6 months"), "development_time");
        assert_eq!(r.label_for("Who are you?"), "about");
    }

    /// Keywords match inside other words.
    #[test]
    fn substring_matching_is_literal() {
        // "this" contains "hi", so greeting wins.
        let (r, _) = builtin();
        assert_eq!(r.label_for("is this thing on"), "greeting");
    }

    /// Each default quick reply lands in its own category.
    #[test]
    fn quick_replies_route_to_expected_categories() {
        let (r, _) = builtin();
        assert_eq!(r.label_for("Our Services"), "services");
        assert_eq!(r.label_for("Contact Info"), "contact");
        assert_eq!(r.label_for("Get Quote"), "pricing");
        assert_eq!(r.label_for("View Projects"), "projects");
    }

    /// Table order decides, and keywords are normalised on construction.
    #[test]
    fn custom_table_order_is_respected() {
        let categories = vec![
            CategoryEntry {
                label: "b".into(),
                keywords: vec!["Beta".into()],
                response: "B".into(),
            },
            CategoryEntry {
                label: "a".into(),
                keywords: vec!["alpha".into(), "beta".into()],
                response: "A".into(),
            },
        ];
        let r = Responder::new(categories, "none");
        assert_eq!(r.respond("alpha beta"), "B");
        assert_eq!(r.respond("alpha"), "A");
        assert_eq!(r.respond("gamma"), "none");
        assert_eq!(r.categories()[0].keywords, vec!["beta"]);
    }
}
