//! LalBot — the rule-based FAQ assistant of LalNova Technologies.
//!
//! * [`spell`] — edit distance, dictionary suggestions, whole-word correction.
//! * [`knowledge`] — dictionary and FAQ category table, built in or JSON.
//! * [`chat`] — the response matcher and conversation sessions.
//! * [`config`] — TOML settings and platform paths.

pub mod chat;
pub mod config;
pub mod knowledge;
pub mod spell;
