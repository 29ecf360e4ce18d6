use std::collections::HashMap;

use rand::Rng;
use regex::{Regex, RegexBuilder};
use tracing::{debug, info};

use crate::error::{FaqError, Result};
use crate::faq::model::{FallbackRule, FaqEntry, FaqMatch, MatchPhase};
use crate::faq::table::{builtin_entries, builtin_fallback_rules};

#[derive(Debug)]
struct CompiledRule {
    rule: FallbackRule,
    regex: Regex,
    entry_index: usize,
}

/// Keyword-then-pattern FAQ lookup over an immutable knowledge base.
///
/// Entries are scanned in table order and the first keyword found as a
/// substring of the normalized input wins. Fallback rules only run when no
/// keyword matched, again first match wins.
#[derive(Debug)]
pub struct FaqMatcher {
    entries: Vec<FaqEntry>,
    rules: Vec<CompiledRule>,
}

impl FaqMatcher {
    pub fn new(entries: Vec<FaqEntry>, rules: Vec<FallbackRule>) -> Result<Self> {
        if entries.is_empty() {
            return Err(FaqError::EmptyTable);
        }

        let mut index_by_id = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if index_by_id.insert(entry.id.clone(), idx).is_some() {
                return Err(FaqError::DuplicateId(entry.id.clone()));
            }
        }

        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let entry_index = *index_by_id.get(&rule.entry_id).ok_or_else(|| {
                FaqError::UnknownEntry {
                    pattern: rule.pattern.clone(),
                    entry_id: rule.entry_id.clone(),
                }
            })?;
            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| FaqError::InvalidPattern {
                    pattern: rule.pattern.clone(),
                    source,
                })?;
            compiled.push(CompiledRule {
                rule,
                regex,
                entry_index,
            });
        }

        info!(
            entries = entries.len(),
            fallback_rules = compiled.len(),
            "knowledge base ready"
        );

        Ok(Self {
            entries,
            rules: compiled,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(builtin_entries(), builtin_fallback_rules())
    }

    /// Answer for `input`, or `None` when neither phase matches.
    pub fn find_answer(&self, input: &str) -> Option<&str> {
        self.find_match(input).map(|m| m.answer())
    }

    pub fn find_match(&self, input: &str) -> Option<FaqMatch<'_>> {
        let normalized = normalize(input);

        for entry in &self.entries {
            if let Some(keyword) = entry
                .keywords
                .iter()
                .find(|k| normalized.contains(k.as_str()))
            {
                debug!(entry_id = %entry.id, keyword = %keyword, "keyword match");
                return Some(FaqMatch {
                    entry,
                    phase: MatchPhase::Keyword,
                    trigger: keyword,
                });
            }
        }

        for compiled in &self.rules {
            if compiled.regex.is_match(&normalized) {
                let entry = &self.entries[compiled.entry_index];
                debug!(entry_id = %entry.id, pattern = %compiled.rule.pattern, "fallback match");
                return Some(FaqMatch {
                    entry,
                    phase: MatchPhase::Fallback,
                    trigger: &compiled.rule.pattern,
                });
            }
        }

        debug!(input = %normalized, "no match");
        None
    }

    pub fn random_entry(&self) -> &FaqEntry {
        self.random_entry_with(&mut rand::thread_rng())
    }

    pub fn random_entry_with<R: Rng>(&self, rng: &mut R) -> &FaqEntry {
        // Non-empty by construction.
        &self.entries[rng.gen_range(0..self.entries.len())]
    }

    pub fn entries_by_category(&self, category: &str) -> Vec<&FaqEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn entry(&self, id: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn fallback_rules(&self) -> Vec<FallbackRule> {
        self.rules.iter().map(|c| c.rule.clone()).collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.category.as_str()) {
                out.push(&entry.category);
            }
        }
        out
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
