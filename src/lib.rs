pub mod chat;
pub mod cli;
pub mod error;
pub mod eval;
pub mod faq;
pub mod output;
pub mod runner;

pub use chat::{ChatMessage, ChatSession, Sender};
pub use error::{FaqError, Result};
pub use eval::{EvalCase, EvalOutcome, EvalSummary, evaluate_cases};
pub use faq::{FallbackRule, FaqEntry, FaqMatch, FaqMatcher, MatchPhase};
