//! Dictionary-based spelling suggestions.
//!
//! [`SpellChecker`] finds, for each word of a message, the closest dictionary
//! entries within a small edit distance.  Nothing is changed here; applying
//! suggestions is the job of [`replace`](crate::spell::replace).

use serde::{Deserialize, Serialize};

use crate::config::SpellConfig;
use crate::spell::dictionary::Dictionary;
use crate::spell::distance::levenshtein;
use crate::spell::replace::is_word_char;

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// A candidate correction for one token of user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The token as the user typed it (punctuation stripped, case kept).
    pub original: String,
    /// Dictionary word proposed in its place.
    pub word: String,
    /// Edit distance between the lowercased `original` and `word`.
    pub distance: usize,
}

// ---------------------------------------------------------------------------
// SpellChecker
// ---------------------------------------------------------------------------

/// Suggests dictionary words for tokens that look misspelled.
///
/// # Example
/// ```rust
/// use lalbot::config::SpellConfig;
/// use lalbot::spell::{Dictionary, SpellChecker};
///
/// let checker = SpellChecker::new(
///     Dictionary::new(["software", "help", "need"]),
///     SpellConfig::default(),
/// );
/// let found = checker.check_message("I need sofware help!");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].word, "software");
/// assert_eq!(found[0].distance, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    config: SpellConfig,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary, config: SpellConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SpellConfig {
        &self.config
    }

    /// Up to `max_suggestions` dictionary words within `max_distance` edits
    /// of `word`, closest first.
    ///
    /// Returns nothing for words shorter than `min_word_len` characters and
    /// for words already in the dictionary.  Ties keep dictionary order.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let lower = word.to_lowercase();
        if word.chars().count() < self.config.min_word_len || self.dictionary.contains(&lower) {
            return Vec::new();
        }

        let mut candidates: Vec<Suggestion> = self
            .dictionary
            .iter()
            .filter_map(|entry| {
                let distance = levenshtein(&lower, entry);
                (distance > 0 && distance <= self.config.max_distance).then(|| Suggestion {
                    original: word.to_string(),
                    word: entry.to_string(),
                    distance,
                })
            })
            .collect();

        // `sort_by_key` is stable, so equal distances stay in dictionary order.
        candidates.sort_by_key(|s| s.distance);
        candidates.truncate(self.config.max_suggestions);
        candidates
    }

    /// Suggestions for every whitespace-separated token of `message`, in
    /// token order.
    ///
    /// Each token is stripped of non-word characters first; tokens left empty
    /// are skipped.  The result is neither deduplicated nor capped.
    pub fn check_message(&self, message: &str) -> Vec<Suggestion> {
        message
            .split_whitespace()
            .map(clean_token)
            .filter(|token| !token.is_empty())
            .flat_map(|token| self.suggest(&token))
            .collect()
    }
}

/// Drop every non-word character from `token`.
pub fn clean_token(token: &str) -> String {
    token.chars().filter(|c| is_word_char(*c)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
