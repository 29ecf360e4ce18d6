//! CivicBot conversation state on top of [`FaqMatcher`].
//!
//! The session owns the message log; the matcher stays read-only and can be
//! shared between sessions.

use std::time::SystemTime;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::faq::FaqMatcher;

pub const GREETING: &str = "Hi! I'm CivicBot, your assistant for the Jan-Samasya civic reporting app. I can help you with reporting issues, tracking your submissions, understanding app features, and answering common questions. What would you like to know?";

pub const FALLBACK_REPLIES: [&str; 5] = [
    "I understand you're looking for help. Could you be more specific about what you need assistance with? You can ask about reporting issues, tracking reports, or general app usage.",
    "I'm here to help with civic issue reporting and tracking. Try asking about how to report an issue, track your reports, or what types of problems you can report.",
    "That's a great question! I can help you with reporting civic issues, tracking your submissions, or answering questions about our app features. What would you like to know?",
    "I'm not sure I understand that question. You can ask me about reporting issues, tracking progress, or how to use specific features of the app.",
    "Let me help you better. You can ask about: How to report an issue, How to track your reports, What types of issues you can report, or How to use the map feature.",
];

pub const QUICK_REPLIES: [&str; 10] = [
    "How do I report an issue?",
    "How can I track my report status?",
    "What types of issues can I report?",
    "How long does it take to resolve issues?",
    "Can I upload photos and videos?",
    "How do I select the exact location?",
    "What if I make a mistake in my report?",
    "How do I know if my report was received?",
    "Can I report anonymously?",
    "What should I do if my issue is urgent?",
];

// Quick replies are offered until the first exchange lands.
const QUICK_REPLY_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: SystemTime,
}

/// Picks one of [`FALLBACK_REPLIES`] uniformly.
pub fn fallback_reply<R: Rng>(rng: &mut R) -> &'static str {
    FALLBACK_REPLIES
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_REPLIES[0])
}

pub struct ChatSession<'a, R> {
    matcher: &'a FaqMatcher,
    rng: R,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl<'a, R: Rng> ChatSession<'a, R> {
    pub fn new(matcher: &'a FaqMatcher, rng: R) -> Self {
        let mut session = Self {
            matcher,
            rng,
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(Sender::Bot, GREETING.to_string());
        session
    }

    /// Appends the user's message and the bot's reply, returning the reply.
    /// Blank input is ignored.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.push(Sender::User, text.to_string());

        let reply = match self.matcher.find_answer(text) {
            Some(answer) => answer.to_string(),
            None => {
                debug!("no faq match, using generic reply");
                fallback_reply(&mut self.rng).to_string()
            }
        };

        self.push(Sender::Bot, reply);
        self.messages.last()
    }

    pub fn quick_replies(&self) -> &'static [&'static str] {
        &QUICK_REPLIES
    }

    pub fn shows_quick_replies(&self) -> bool {
        self.messages.len() <= QUICK_REPLY_WINDOW
    }

    /// Oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, sender: Sender, content: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            content,
            timestamp: SystemTime::now(),
        });
        self.next_id += 1;
    }
}
