//! The chat assistant.
//!
//! This module provides:
//! * [`ResponseMatcher`] — spelling suggestions, auto-correction and FAQ
//!   responses over one knowledge base.
//! * [`Responder`] — ordered, first-match-wins keyword classification.
//! * [`ChatSession`] — history, draft and pending suggestions of one
//!   conversation.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use lalbot::chat::{ChatSession, ResponseMatcher};
//! use lalbot::config::AppConfig;
//!
//! let config = AppConfig::default();
//! let matcher = Arc::new(ResponseMatcher::builtin());
//! let mut session = ChatSession::new(matcher, config.chat);
//!
//! session.set_draft("how can I contac you?");
//! let exchange = session.send().unwrap();
//! assert_eq!(exchange.category, "contact");
//! println!("{}", exchange.reply);
//! ```

pub mod matcher;
pub mod responder;
pub mod session;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use matcher::ResponseMatcher;
pub use responder::{Responder, DEFAULT_LABEL};
pub use session::{ChatMessage, ChatSession, Exchange, Sender};
