use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    /// Lowercase substrings; any one found in the normalized input selects this entry.
    pub keywords: Vec<String>,
}

impl FaqEntry {
    pub fn new(id: &str, question: &str, answer: &str, category: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Regex consulted only after the keyword scan misses. Points at an entry by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRule {
    pub entry_id: String,
    pub pattern: String,
}

impl FallbackRule {
    pub fn new(pattern: &str, entry_id: &str) -> Self {
        Self {
            entry_id: entry_id.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Keyword,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqMatch<'a> {
    pub entry: &'a FaqEntry,
    pub phase: MatchPhase,
    /// The keyword or pattern that fired.
    pub trigger: &'a str,
}

impl<'a> FaqMatch<'a> {
    pub fn answer(&self) -> &'a str {
        &self.entry.answer
    }
}
