use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::chat::ChatMessage;
use crate::cli::OutputFormat;
use crate::error::{FaqError, Result};
use crate::eval::EvalSummary;
use crate::faq::{FaqEntry, FaqMatch, MatchPhase};

#[derive(Serialize)]
struct JsonAnswer<'a> {
    question: &'a str,
    matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phase: Option<MatchPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    answer: Option<&'a str>,
}

/// `reply` is what gets shown to the user; `None` only when generic replies are disabled.
pub fn print_answer<W: Write>(
    out: &mut W,
    format: OutputFormat,
    question: &str,
    hit: Option<FaqMatch<'_>>,
    reply: Option<&str>,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(reply) = reply {
                writeln!(out, "{reply}")?;
            }
        }
        OutputFormat::Json => {
            let json = JsonAnswer {
                question,
                matched: hit.is_some(),
                entry_id: hit.map(|m| m.entry.id.as_str()),
                phase: hit.map(|m| m.phase),
                trigger: hit.map(|m| m.trigger),
                answer: reply,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

pub fn print_entries<W: Write>(
    out: &mut W,
    format: OutputFormat,
    entries: &[&FaqEntry],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (idx, entry) in entries.iter().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "[{}] {} ({})", entry.id, entry.question, entry.category)?;
                writeln!(out, "{}", entry.answer)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        }
    }
    Ok(())
}

pub fn print_eval<W: Write>(
    out: &mut W,
    format: OutputFormat,
    summary: &EvalSummary,
    required_pass_rate: f32,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "total={} passed={} failed={} pass_rate={:.4} required={:.4} meets_threshold={}",
                summary.total,
                summary.passed,
                summary.failed,
                summary.pass_rate,
                required_pass_rate,
                summary.meets(required_pass_rate)
            )?;
            for o in &summary.outcomes {
                writeln!(
                    out,
                    "case={} passed={} expected={} actual={} latency={:.3}ms",
                    o.case_id,
                    o.passed,
                    o.expected_entry_id.as_deref().unwrap_or("null"),
                    o.actual_entry_id.as_deref().unwrap_or("null"),
                    o.latency_ms
                )?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
        }
    }
    Ok(())
}

pub fn print_message<W: Write>(out: &mut W, message: &ChatMessage) -> Result<()> {
    writeln!(out, "{}> {}", message.sender.as_str(), message.content)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonMessage<'a> {
    id: u64,
    sender: &'a str,
    content: &'a str,
    timestamp: String,
}

fn json_messages(messages: &[ChatMessage]) -> Vec<JsonMessage<'_>> {
    messages
        .iter()
        .map(|m| JsonMessage {
            id: m.id,
            sender: m.sender.as_str(),
            content: &m.content,
            timestamp: humantime::format_rfc3339_millis(m.timestamp).to_string(),
        })
        .collect()
}

pub fn write_transcript(path: &Path, messages: &[ChatMessage]) -> Result<()> {
    let file = File::create(path).map_err(|source| FaqError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &json_messages(messages))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
