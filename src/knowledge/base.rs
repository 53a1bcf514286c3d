//! Knowledge-base data: dictionary words plus the ordered FAQ category table.
//!
//! A [`KnowledgeBase`] is plain data that can be read from / written to JSON.
//! [`KnowledgeBase::load_from`] validates it before handing it out; an
//! invalid file never reaches the matcher.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// KnowledgeError
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or validating a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The file could not be read or written.
    #[error("knowledge base I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid knowledge-base JSON.
    #[error("failed to parse knowledge base: {0}")]
    Parse(#[from] serde_json::Error),

    /// A category has no trigger keywords.
    #[error("category `{category}` has no keywords")]
    EmptyKeywords { category: String },

    /// Two categories share a label.
    #[error("category `{0}` is defined more than once")]
    DuplicateCategory(String),

    /// The fallback response is blank.
    #[error("default response must not be empty")]
    MissingDefault,

    /// No dictionary words were supplied.
    #[error("dictionary must contain at least one word")]
    EmptyDictionary,
}

// ---------------------------------------------------------------------------
// CategoryEntry
// ---------------------------------------------------------------------------

/// One FAQ topic: trigger keywords and the canned answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub label: String,
    /// Lowercase substrings; any one of them selects this category.
    pub keywords: Vec<String>,
    pub response: String,
}

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

/// Everything the matcher needs to know about the business.
///
/// ```rust
/// use lalbot::knowledge::KnowledgeBase;
///
/// let kb = KnowledgeBase::builtin();
/// assert_eq!(kb.categories[0].label, "greeting");
/// assert!(kb.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Correctly spelled words used for suggestions.
    pub dictionary: Vec<String>,
    /// Categories in match-priority order.
    pub categories: Vec<CategoryEntry>,
    /// Answer used when no category matches.
    pub default_response: String,
}

impl KnowledgeBase {
    /// The LalNova dictionary and FAQ table.
    pub fn builtin() -> Self {
        crate::knowledge::builtin::knowledge_base()
    }

    /// Read, normalise and validate a JSON knowledge base.
    pub fn load_from(path: &Path) -> Result<Self, KnowledgeError> {
        let data = std::fs::read_to_string(path)?;
        let mut kb: Self = serde_json::from_str(&data)?;
        kb.normalize();
        kb.validate()?;
        Ok(kb)
    }

    /// Load `path` if given, falling back to [`builtin`](Self::builtin) on any
    /// error.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load_from(path) {
            Ok(kb) => {
                log::info!(
                    "Loaded knowledge base from {} ({} words, {} categories)",
                    path.display(),
                    kb.dictionary.len(),
                    kb.categories.len()
                );
                kb
            }
            Err(e) => {
                log::warn!(
                    "Could not load knowledge base {} ({e}); using built-in table",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    /// Write as pretty-printed JSON, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), KnowledgeError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Lowercase and trim dictionary words and keywords; drop blank entries.
    pub fn normalize(&mut self) {
        self.dictionary = self
            .dictionary
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        for category in &mut self.categories {
            category.keywords = category
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }
    }

    /// Check the invariants the matcher relies on.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        if self.dictionary.iter().all(|w| w.trim().is_empty()) {
            return Err(KnowledgeError::EmptyDictionary);
        }
        if self.default_response.trim().is_empty() {
            return Err(KnowledgeError::MissingDefault);
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.label.as_str()) {
                return Err(KnowledgeError::DuplicateCategory(category.label.clone()));
            }
            if category.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(KnowledgeError::EmptyKeywords {
                    category: category.label.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
