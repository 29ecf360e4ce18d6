use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{FaqError, Result};
use crate::faq::model::{FallbackRule, FaqEntry};

pub fn save_entries_jsonl(path: &Path, entries: &[FaqEntry]) -> Result<()> {
    save_jsonl(path, entries)
}

pub fn load_entries_jsonl(path: &Path) -> Result<Vec<FaqEntry>> {
    let entries = load_jsonl(path)?;
    info!(path = %path.display(), count = entries.len(), "loaded faq entries");
    Ok(entries)
}

pub fn save_rules_jsonl(path: &Path, rules: &[FallbackRule]) -> Result<()> {
    save_jsonl(path, rules)
}

pub fn load_rules_jsonl(path: &Path) -> Result<Vec<FallbackRule>> {
    let rules = load_jsonl(path)?;
    info!(path = %path.display(), count = rules.len(), "loaded fallback rules");
    Ok(rules)
}

fn save_jsonl<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let file = File::create(path).map_err(|source| FaqError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

fn load_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| FaqError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut items = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|source| FaqError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        items.push(item);
    }

    Ok(items)
}
