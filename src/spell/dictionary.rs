//! The set of words considered correctly spelled.

use std::collections::HashSet;

/// Known-good words, stored lowercase.
///
/// Iteration order is insertion order (duplicates dropped), which is what the
/// suggestion finder uses to break distance ties.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from `words`, lowercasing each entry and skipping
    /// blanks and repeats.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || dict.index.contains(&word) {
                continue;
            }
            dict.index.insert(word.clone());
            dict.words.push(word);
        }
        dict
    }

    /// Literal membership test.  `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
