pub mod matcher;
pub mod model;
pub mod storage;
pub mod table;

pub use matcher::FaqMatcher;
pub use model::{FallbackRule, FaqEntry, FaqMatch, MatchPhase};
pub use storage::{load_entries_jsonl, load_rules_jsonl, save_entries_jsonl, save_rules_jsonl};
pub use table::{builtin_entries, builtin_fallback_rules};
