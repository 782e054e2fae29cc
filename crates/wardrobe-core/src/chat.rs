//! Rule-based chat replies.
//!
//! A message is lower-cased and scanned against an ordered table of keyword
//! categories. The first category with a keyword occurring anywhere in the
//! message wins, so "hi" also fires on words like "this". Unmatched messages get
//! a fallback that quotes the message back.

use crate::model::ChatExchange;
use crate::session::SessionStore;

/// A keyword category and the fixed reply it produces.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl KeywordRule {
    /// `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Chat categories in priority order.
pub const CHAT_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "greeting",
        keywords: &["hello", "hi", "hey"],
        reply: "Hello! I'm your Seasonal Wardrobe assistant. How can I help you with sustainable fashion today?",
    },
    KeywordRule {
        name: "weather",
        keywords: &["weather", "temperature", "climate"],
        reply: "I can help you choose outfits based on weather! Check out the Energy Tips page for weather-based recommendations.",
    },
    KeywordRule {
        name: "sustainability",
        keywords: &["sustainable", "eco", "environment"],
        reply: "Great question about sustainability! Consider buying second-hand, choosing natural fabrics, and building a capsule wardrobe. The Sustainable Planner can help you track eco-friendly fashion goals.",
    },
    KeywordRule {
        name: "outfit",
        keywords: &["outfit", "wear", "clothing"],
        reply: "I can help analyze your outfits! Try the Outfit Analyzer to upload photos and get personalized recommendations.",
    },
    KeywordRule {
        name: "organization",
        keywords: &["organize", "wardrobe"],
        reply: "Visit the Outfit Organizer page to manage your wardrobe items digitally and keep track of what you own!",
    },
    KeywordRule {
        name: "season",
        keywords: &["season", "spring", "summer", "fall", "winter", "autumn"],
        reply: "Each season calls for different fabrics and styles! Take our Seasonal Quiz to discover your perfect seasonal style profile.",
    },
];

/// Return the first rule in `rules` that matches `text`, case-insensitively.
pub fn match_rule<'a>(rules: &'a [KeywordRule], text: &str) -> Option<&'a KeywordRule> {
    let lower = text.to_lowercase();
    rules.iter().find(|rule| rule.matches(&lower))
}

/// Pick the canned reply for a chat message.
pub fn generate_reply(message: &str) -> String {
    match match_rule(CHAT_RULES, message) {
        Some(rule) => rule.reply.to_string(),
        None => format!(
            "That's an interesting question about '{message}'. I'd recommend exploring our \
             Outfit Analyzer for fashion insights, or checking Energy Tips for weather-based \
             outfit suggestions!"
        ),
    }
}

/// Record `message` in its session, reply to it, and return the updated history.
///
/// A missing or empty `session_id` starts a new session.
pub fn chat(store: &SessionStore, message: &str, session_id: Option<&str>) -> ChatExchange {
    let session_id = match session_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => SessionStore::new_session_id(),
    };

    let (response, history) = store.exchange(&session_id, message, generate_reply);
    tracing::debug!(
        session_id = %session_id,
        turns = history.len(),
        "chat reply generated"
    );

    ChatExchange {
        response,
        session_id,
        history,
    }
}
