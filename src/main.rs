//! Application entry point — LalBot terminal chat.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the knowledge base (built-in table when no file is configured).
//! 4. Build the [`ResponseMatcher`] and a [`ChatSession`].
//! 5. Read lines from stdin until EOF or `:q`.
//!
//! # Input
//!
//! | Line      | Effect                                            |
//! |-----------|---------------------------------------------------|
//! | `text`    | compose and send (asks first if unsure of a fix)  |
//! | *(empty)* | send the held draft as typed                      |
//! | `:N`      | accept spelling suggestion N, then send           |
//! | `#N`      | send quick reply N                                |
//! | `:q`      | quit                                              |

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use lalbot::{
    chat::{ChatSession, Exchange, ResponseMatcher},
    config::AppConfig,
    knowledge::KnowledgeBase,
};

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn print_bot(session: &ChatSession, text: &str) {
    println!("{}> {}", session.bot_name(), text);
}

fn print_quick_replies(session: &ChatSession) {
    let replies = session.quick_replies();
    if replies.is_empty() {
        return;
    }
    let listed: Vec<String> = replies
        .iter()
        .enumerate()
        .map(|(i, r)| format!("#{} {}", i + 1, r))
        .collect();
    println!("   {}", listed.join("  "));
}

fn print_suggestions(session: &ChatSession) {
    println!("   Spelling suggestions:");
    for (i, s) in session.pending().iter().enumerate() {
        println!("   :{} {} → {}", i + 1, s.original, s.word);
    }
    println!("   (pick one, or press Enter to send as typed)");
}

fn print_exchange(session: &ChatSession, exchange: &Exchange) {
    log::debug!("sent {:?} → {}", exchange.sent, exchange.category);
    print_bot(session, &exchange.reply);
    print_quick_replies(session);
}

/// Parse `:N` / `#N` style one-based indices.
fn parse_index(rest: &str) -> Option<usize> {
    rest.trim().parse::<usize>().ok()?.checked_sub(1)
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("LalBot starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Knowledge base
    let knowledge_file = config.knowledge.resolve_file();
    let kb = KnowledgeBase::load_or_builtin(knowledge_file.as_deref());

    // 4. Matcher + session
    let matcher = Arc::new(ResponseMatcher::new(&kb, config.spell.clone()));
    let mut session = ChatSession::new(matcher, config.chat.clone());

    if let Some(welcome) = session.history().first() {
        print_bot(&session, &welcome.text);
    }
    print_quick_replies(&session);

    // 5. Input loop
    let stdin = io::stdin();
    let mut holding = false;
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        if line == ":q" {
            break;
        }

        let exchange = if let Some(rest) = line.strip_prefix('#') {
            match parse_index(rest).and_then(|i| session.send_quick_reply(i)) {
                Some(exchange) => exchange,
                None => {
                    println!("   No such quick reply.");
                    continue;
                }
            }
        } else if let Some(rest) = line.strip_prefix(':') {
            match parse_index(rest).and_then(|i| session.accept_suggestion(i).map(str::to_owned)) {
                Some(corrected) => println!("   → {corrected}"),
                None => {
                    println!("   No such suggestion.");
                    continue;
                }
            }
            match session.send() {
                Some(exchange) => exchange,
                None => continue,
            }
        } else if line.trim().is_empty() {
            if !holding {
                continue;
            }
            match session.send() {
                Some(exchange) => exchange,
                None => continue,
            }
        } else {
            session.set_draft(line);
            if !session.needs_confirmation().is_empty() {
                print_suggestions(&session);
                holding = true;
                continue;
            }
            match session.send() {
                Some(exchange) => exchange,
                None => continue,
            }
        };

        holding = false;
        print_exchange(&session, &exchange);
    }

    log::info!("LalBot shutting down");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
