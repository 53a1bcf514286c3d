//! Spelling suggestions and correction for chat input.
//!
//! This module provides:
//! * [`levenshtein`] — edit distance between two strings.
//! * [`Dictionary`] — the lowercase set of known-good words.
//! * [`SpellChecker`] / [`Suggestion`] — nearest dictionary words per token.
//! * [`auto_correct`] / [`apply_suggestion`] — whole-word replacement.

pub mod checker;
pub mod dictionary;
pub mod distance;
pub mod replace;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use checker::{clean_token, SpellChecker, Suggestion};
pub use dictionary::Dictionary;
pub use distance::levenshtein;
pub use replace::{apply_suggestion, auto_correct, is_word_char, replace_whole_word};
