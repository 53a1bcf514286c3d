//! One conversation with the assistant.
//!
//! [`ChatSession`] tracks the message history, the message the user is
//! currently composing and the spelling suggestions shown for it:
//!
//! ```text
//! set_draft ──▶ pending suggestions
//!     │              │
//!     │        accept_suggestion ──▶ draft updated, suggestions cleared
//!     ▼
//!   send ──▶ auto-correct ──▶ user message + bot response appended
//! ```

use std::sync::Arc;

use crate::config::ChatConfig;
use crate::spell::Suggestion;

use super::matcher::ResponseMatcher;

// ---------------------------------------------------------------------------
// ChatMessage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

/// A single entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }
}

/// The outcome of sending one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Text actually sent, after auto-correction.
    pub sent: String,
    /// Label of the category that produced the reply.
    pub category: String,
    pub reply: String,
}

// ---------------------------------------------------------------------------
// ChatSession
// ---------------------------------------------------------------------------

/// Conversation state around a shared [`ResponseMatcher`].
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use lalbot::chat::{ChatSession, ResponseMatcher};
/// use lalbot::config::ChatConfig;
///
/// let mut session = ChatSession::new(Arc::new(ResponseMatcher::builtin()), ChatConfig::default());
/// session.set_draft("what are your sevices?");
/// let exchange = session.send().unwrap();
/// assert_eq!(exchange.sent, "what are your services?");
/// assert_eq!(exchange.category, "services");
/// ```
pub struct ChatSession {
    matcher: Arc<ResponseMatcher>,
    config: ChatConfig,
    history: Vec<ChatMessage>,
    draft: String,
    pending: Vec<Suggestion>,
}

impl ChatSession {
    /// Start a conversation seeded with the welcome message.
    pub fn new(matcher: Arc<ResponseMatcher>, config: ChatConfig) -> Self {
        let history = vec![ChatMessage::bot(config.welcome_message.clone())];
        Self {
            matcher,
            config,
            history,
            draft: String::new(),
            pending: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Composing
    // -----------------------------------------------------------------------

    /// Replace the draft and refresh the spelling suggestions for it.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.pending = if self.matcher.spell_config().enabled && !self.draft.trim().is_empty() {
            self.matcher.check_spelling(&self.draft)
        } else {
            Vec::new()
        };
    }

    /// Apply pending suggestion `index` to the draft.
    ///
    /// Clears all pending suggestions and returns the updated draft, or
    /// `None` when `index` is out of range.
    pub fn accept_suggestion(&mut self, index: usize) -> Option<&str> {
        let suggestion = self.pending.get(index)?.clone();
        self.draft = self.matcher.apply_suggestion(&self.draft, &suggestion);
        self.pending.clear();
        Some(&self.draft)
    }

    /// Pending suggestions that auto-correction will not apply on its own.
    pub fn needs_confirmation(&self) -> Vec<&Suggestion> {
        self.pending
            .iter()
            .filter(|s| !self.matcher.is_auto_correctable(s))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Sending
    // -----------------------------------------------------------------------

    /// Auto-correct and send the draft.  Returns `None` for a blank draft.
    pub fn send(&mut self) -> Option<Exchange> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        self.pending.clear();

        let text = if self.matcher.spell_config().enabled {
            let suggestions = self.matcher.check_spelling(&draft);
            self.matcher.auto_correct(&draft, &suggestions)
        } else {
            draft
        };
        Some(self.exchange(text))
    }

    /// Send quick reply `index` verbatim, discarding any unsent draft and its
    /// suggestions.  Returns `None` when quick replies are hidden or `index`
    /// is out of range.
    pub fn send_quick_reply(&mut self, index: usize) -> Option<Exchange> {
        let text = self.quick_replies().get(index)?.clone();
        self.draft.clear();
        self.pending.clear();
        Some(self.exchange(text))
    }

    fn exchange(&mut self, text: String) -> Exchange {
        let category = self.matcher.category_for(&text).to_string();
        let reply = self.matcher.get_response(&text).to_string();
        log::debug!("turn {}: category={category}", self.history.len() / 2);

        self.history.push(ChatMessage::user(text.clone()));
        self.history.push(ChatMessage::bot(reply.clone()));

        Exchange {
            sent: text,
            category,
            reply,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn pending(&self) -> &[Suggestion] {
        &self.pending
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn bot_name(&self) -> &str {
        &self.config.bot_name
    }

    /// Quick replies, offered only at the start of the conversation.
    pub fn quick_replies(&self) -> &[String] {
        if self.history.len() <= self.config.quick_reply_max_messages {
            &self.config.quick_replies
        } else {
            &[]
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
