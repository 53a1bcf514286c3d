//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Missing keys fall back
//! to their defaults, so a partial `settings.toml` is valid.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// SpellConfig
// ---------------------------------------------------------------------------

/// Limits for spelling suggestions and auto-correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Whether drafts are spell-checked and auto-corrected at all.
    pub enabled: bool,
    /// Words with fewer characters than this are never checked.
    pub min_word_len: usize,
    /// Largest edit distance still offered as a suggestion.
    pub max_distance: usize,
    /// Maximum suggestions returned per word.
    pub max_suggestions: usize,
    /// Suggestions at or below this distance are applied without asking.
    pub auto_correct_distance: usize,
}

impl Default for SpellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_word_len: 3,
            max_distance: 2,
            max_suggestions: 3,
            auto_correct_distance: 1,
        }
    }
}

impl SpellConfig {
    /// Largest edit distance a suggestion may have.
    pub const MAX_DISTANCE: usize = 2;
    /// Shortest word that is spell-checked.
    pub const MIN_WORD_LEN: usize = 3;

    /// Clamp limits into the supported range, warning about each change.
    ///
    /// * `max_distance` → `1..=2`
    /// * `min_word_len` → at least 3
    /// * `max_suggestions` → at least 1
    /// * `auto_correct_distance` → at most `max_distance`
    pub fn sanitize(&mut self) {
        let max_distance = self.max_distance.clamp(1, Self::MAX_DISTANCE);
        if max_distance != self.max_distance {
            log::warn!(
                "spell.max_distance = {} is out of range; using {max_distance}",
                self.max_distance
            );
            self.max_distance = max_distance;
        }
        if self.min_word_len < Self::MIN_WORD_LEN {
            log::warn!(
                "spell.min_word_len = {} is too small; using {}",
                self.min_word_len,
                Self::MIN_WORD_LEN
            );
            self.min_word_len = Self::MIN_WORD_LEN;
        }
        if self.max_suggestions == 0 {
            log::warn!("spell.max_suggestions = 0 would hide every suggestion; using 1");
            self.max_suggestions = 1;
        }
        if self.auto_correct_distance > self.max_distance {
            log::warn!(
                "spell.auto_correct_distance = {} exceeds max_distance; using {}",
                self.auto_correct_distance,
                self.max_distance
            );
            self.auto_correct_distance = self.max_distance;
        }
    }
}

// ---------------------------------------------------------------------------
// ChatConfig
// ---------------------------------------------------------------------------

/// Conversation presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Display name of the assistant.
    pub bot_name: String,
    /// First bot message of every session.
    pub welcome_message: String,
    /// Canned prompts offered at the start of a conversation.
    pub quick_replies: Vec<String>,
    /// Quick replies are shown while the history holds at most this many
    /// messages.
    pub quick_reply_max_messages: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: "LalBot".into(),
            welcome_message:
                "Hello, Welcome to LalNova Technologies! What can I help you with today?".into(),
            quick_replies: vec![
                "Our Services".into(),
                "Contact Info".into(),
                "Get Quote".into(),
                "View Projects".into(),
            ],
            quick_reply_max_messages: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// KnowledgeConfig
// ---------------------------------------------------------------------------

/// Where the dictionary and category table come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// JSON knowledge-base file.  `None` uses `AppPaths::knowledge_file` when
    /// it exists and the built-in table otherwise.
    pub file: Option<PathBuf>,
}

impl KnowledgeConfig {
    /// The knowledge file to try, if any.
    pub fn resolve_file(&self) -> Option<PathBuf> {
        match &self.file {
            Some(path) => Some(path.clone()),
            None => {
                let default = AppPaths::new().knowledge_file;
                default.exists().then_some(default)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use lalbot::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// assert!(config.spell.max_suggestions > 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Spelling suggestion settings.
    pub spell: SpellConfig,
    /// Conversation settings.
    pub chat: ChatConfig,
    /// Knowledge-base source.
    pub knowledge: KnowledgeConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).  Spelling limits are
    /// clamped with [`SpellConfig::sanitize`].
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.spell.sanitize();
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Saving the defaults and loading them back yields an equal config.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// A missing settings file is not an error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    /// Defaults match the shipped spelling and chat settings.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert!(cfg.spell.enabled);
        assert_eq!(cfg.spell.min_word_len, 3);
        assert_eq!(cfg.spell.max_distance, 2);
        assert_eq!(cfg.spell.max_suggestions, 3);
        assert_eq!(cfg.spell.auto_correct_distance, 1);
        assert_eq!(cfg.chat.bot_name, "LalBot");
        assert_eq!(cfg.chat.quick_replies.len(), 4);
        assert_eq!(cfg.chat.quick_reply_max_messages, 2);
        assert!(cfg.knowledge.file.is_none());
    }

    /// Keys absent from the file take their default values.
    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[spell]\nmax_distance = 1\n").expect("write");

        let cfg = AppConfig::load_from(&path).expect("load");
        assert_eq!(cfg.spell.max_distance, 1);
        assert_eq!(cfg.spell.max_suggestions, 3);
        assert_eq!(cfg.chat, ChatConfig::default());
    }

    /// Non-default values survive a save and reload through a nested directory.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.spell.enabled = false;
        cfg.spell.auto_correct_distance = 0;
        cfg.chat.bot_name = "Helper".into();
        cfg.chat.quick_replies = vec!["Pricing".into()];
        cfg.knowledge.file = Some(PathBuf::from("/tmp/kb.json"));

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert!(!loaded.spell.enabled);
        assert_eq!(loaded.spell.auto_correct_distance, 0);
        assert_eq!(loaded.chat.bot_name, "Helper");
        assert_eq!(loaded.chat.quick_replies, vec!["Pricing".to_string()]);
        assert_eq!(loaded.knowledge.file, Some(PathBuf::from("/tmp/kb.json")));
    }

    /// Broken TOML is reported instead of silently replaced.
    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "spell = [").expect("write");

        assert!(AppConfig::load_from(&path).is_err());
    }

    /// A configured knowledge file is used as given.
    #[test]
    fn explicit_knowledge_file_wins() {
        let cfg = KnowledgeConfig {
            file: Some(PathBuf::from("custom.json")),
        };
        assert_eq!(cfg.resolve_file(), Some(PathBuf::from("custom.json")));
    }

    /// Out-of-range spelling limits in the file are pulled back into range.
    #[test]
    fn load_clamps_spell_limits() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("wild.toml");
        std::fs::write(
            &path,
            "[spell]\nmax_distance = 5\nmin_word_len = 0\nmax_suggestions = 0\nauto_correct_distance = 4\n",
        )
        .expect("write");

        let cfg = AppConfig::load_from(&path).expect("load");
        assert_eq!(cfg.spell.max_distance, 2);
        assert_eq!(cfg.spell.min_word_len, 3);
        assert_eq!(cfg.spell.max_suggestions, 1);
        assert_eq!(cfg.spell.auto_correct_distance, 2);
    }

    /// `max_distance = 0` is raised to 1 so suggestions stay possible.
    #[test]
    fn sanitize_raises_zero_distance() {
        let mut spell = SpellConfig {
            max_distance: 0,
            auto_correct_distance: 0,
            ..SpellConfig::default()
        };
        spell.sanitize();
        assert_eq!(spell.max_distance, 1);
        assert_eq!(spell.auto_correct_distance, 0);
    }

    /// Defaults are already in range and are left alone.
    #[test]
    fn sanitize_keeps_defaults() {
        let mut spell = SpellConfig::default();
        spell.sanitize();
        assert_eq!(spell, SpellConfig::default());
    }
}
