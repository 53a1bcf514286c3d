//! What the assistant knows: spelling dictionary and FAQ categories.
//!
//! * [`KnowledgeBase`] / [`CategoryEntry`] — serialisable data, JSON on disk.
//! * [`KnowledgeError`] — load and validation failures.
//!
//! [`KnowledgeBase::builtin`] ships the LalNova table so the bot works with no
//! files present.

pub mod base;
mod builtin;

pub use base::{CategoryEntry, KnowledgeBase, KnowledgeError};
