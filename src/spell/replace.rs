//! Whole-word, case-insensitive replacement of suggested corrections.
//!
//! Matches are `(?i)\b<original>\b` with the original escaped, so only
//! whole words are replaced and correcting `web` never touches `webbing`.
//! `regex` treats `\w` and `\b` as Unicode-aware, which keeps the boundary
//! rule consistent with [`is_word_char`].

use regex::{NoExpand, Regex};

use crate::spell::checker::Suggestion;

/// Letters, digits and underscore, in any script.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every whole-word, case-insensitive occurrence of `from` in `text`
/// with `to`.  `to` is inserted literally; `$` is not a group reference.
pub fn replace_whole_word(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    match Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from))) {
        Ok(re) => re.replace_all(text, NoExpand(to)).into_owned(),
        Err(e) => {
            log::warn!("Cannot build word pattern for {from:?} ({e}); text left unchanged");
            text.to_string()
        }
    }
}

/// Apply one suggestion regardless of its distance.
///
/// ```rust
/// use lalbot::spell::{apply_suggestion, Suggestion};
///
/// let s = Suggestion { original: "emial".into(), word: "email".into(), distance: 2 };
/// assert_eq!(apply_suggestion("Emial me, emial!", &s), "email me, email!");
/// ```
pub fn apply_suggestion(text: &str, suggestion: &Suggestion) -> String {
    replace_whole_word(text, &suggestion.original, &suggestion.word)
}

/// Apply, in list order, every suggestion whose distance is between 1 and
/// `max_distance`.  Farther suggestions are left for the user to confirm;
/// distance 0 means the word was already correct.
pub fn auto_correct(text: &str, suggestions: &[Suggestion], max_distance: usize) -> String {
    suggestions
        .iter()
        .filter(|s| (1..=max_distance).contains(&s.distance))
        .fold(text.to_string(), |acc, s| apply_suggestion(&acc, s))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
