//! Configuration module for LalBot.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for spelling, chat
//! and knowledge-base loading, `AppPaths` for cross-platform directories, and
//! TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ChatConfig, KnowledgeConfig, SpellConfig};
