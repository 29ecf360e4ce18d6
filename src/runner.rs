use std::io::{self, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use crate::chat::{ChatMessage, ChatSession, fallback_reply};
use crate::cli::{Cli, Command};
use crate::error::{FaqError, Result};
use crate::eval::{evaluate_cases, read_eval_cases_json};
use crate::faq::{
    FaqMatcher, builtin_entries, builtin_fallback_rules, load_entries_jsonl, load_rules_jsonl,
    save_entries_jsonl, save_rules_jsonl,
};
use crate::output;

/// What the binary should exit with once output has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NoMatch,
}

/// Builds the matcher the CLI was pointed at. A custom table without a rule
/// file gets no fallback rules, since the built-in ones name built-in ids.
pub fn load_matcher(cli: &Cli) -> Result<FaqMatcher> {
    match (&cli.knowledge_base, &cli.fallback_rules) {
        (None, None) => FaqMatcher::new(builtin_entries(), builtin_fallback_rules()),
        (Some(kb), rules) => {
            let entries = load_entries_jsonl(kb)?;
            let rules = match rules {
                Some(path) => load_rules_jsonl(path)?,
                None => Vec::new(),
            };
            FaqMatcher::new(entries, rules)
        }
        (None, Some(_)) => Err(FaqError::InvalidArg(
            "--fallback-rules requires --knowledge-base".to_string(),
        )),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn run(cli: &Cli) -> Result<Outcome> {
    cli.validate().map_err(FaqError::InvalidArg)?;

    let matcher = load_matcher(cli)?;
    let mut rng = make_rng(cli.seed);
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Ask { no_fallback, .. } => {
            let question = cli.question().unwrap_or_default();
            let hit = matcher.find_match(&question);
            let reply = match hit {
                Some(m) => Some(m.answer()),
                None if *no_fallback => None,
                None => Some(fallback_reply(&mut rng)),
            };
            output::print_answer(&mut out, cli.output, &question, hit, reply)?;
            if hit.is_none() && *no_fallback {
                return Ok(Outcome::NoMatch);
            }
        }
        Command::Chat { transcript } => {
            let session = run_chat(&mut out, &matcher, rng)?;
            if let Some(path) = transcript {
                output::write_transcript(path, &session)?;
                info!(path = %path.display(), messages = session.len(), "transcript written");
            }
        }
        Command::Random => {
            let entry = matcher.random_entry_with(&mut rng);
            output::print_entries(&mut out, cli.output, &[entry])?;
        }
        Command::Category { name } => {
            let entries = matcher.entries_by_category(name);
            output::print_entries(&mut out, cli.output, &entries)?;
        }
        Command::List => {
            let entries: Vec<_> = matcher.entries().iter().collect();
            output::print_entries(&mut out, cli.output, &entries)?;
        }
        Command::Export { entries, rules } => {
            save_entries_jsonl(entries, matcher.entries())?;
            if let Some(path) = rules {
                save_rules_jsonl(path, &matcher.fallback_rules())?;
            }
            info!(path = %entries.display(), "knowledge base exported");
        }
        Command::Eval {
            cases,
            min_pass_rate,
        } => {
            let cases = read_eval_cases_json(cases)?;
            let summary = evaluate_cases(&matcher, &cases);
            output::print_eval(&mut out, cli.output, &summary, *min_pass_rate)?;
            if !summary.meets(*min_pass_rate) {
                return Err(FaqError::EvalBelowThreshold {
                    pass_rate: summary.pass_rate,
                    required: *min_pass_rate,
                });
            }
        }
    }

    out.flush()?;
    Ok(Outcome::Success)
}

fn run_chat<W: Write>(out: &mut W, matcher: &FaqMatcher, rng: StdRng) -> Result<Vec<ChatMessage>> {
    let mut session = ChatSession::new(matcher, rng);

    for message in session.transcript() {
        output::print_message(out, message)?;
    }
    if session.shows_quick_replies() {
        writeln!(out, "Quick questions:")?;
        for q in session.quick_replies() {
            writeln!(out, "  - {q}")?;
        }
    }
    out.flush()?;

    let mut rl = DefaultEditor::new()?;
    loop {
        let line = match rl.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if matches!(trimmed.to_ascii_lowercase().as_str(), "exit" | "quit") {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        rl.add_history_entry(trimmed).ok();

        if let Some(reply) = session.send(&line) {
            output::print_message(out, reply)?;
            out.flush()?;
        }
    }

    Ok(session.transcript().to_vec())
}
