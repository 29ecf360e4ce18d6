use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::eval::DEFAULT_REQUIRED_PASS_RATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "jan-samasya",
    version,
    about = "CivicBot FAQ assistant for the Jan-Samasya civic reporting app"
)]
pub struct Cli {
    /// JSONL file of FAQ entries replacing the built-in table.
    #[arg(long, global = true, env = "JAN_SAMASYA_KB")]
    pub knowledge_base: Option<PathBuf>,

    /// JSONL file of fallback rules ({"entry_id", "pattern"} per line).
    #[arg(long, global = true, env = "JAN_SAMASYA_RULES")]
    pub fallback_rules: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Seed for random picks (generic replies, `random`).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a single question.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Exit with status 1 instead of printing a generic reply on no match.
        #[arg(long)]
        no_fallback: bool,
    },
    /// Interactive CivicBot session.
    Chat {
        #[arg(long)]
        transcript: Option<PathBuf>,
    },
    /// Show a random FAQ entry.
    Random,
    /// List the entries of one category (exact, case-sensitive).
    Category { name: String },
    /// List every entry.
    List,
    /// Write the active knowledge base as JSONL.
    Export {
        #[arg(long)]
        entries: PathBuf,
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Run labelled questions through the matcher.
    Eval {
        #[arg(long)]
        cases: PathBuf,
        #[arg(long, default_value_t = DEFAULT_REQUIRED_PASS_RATE)]
        min_pass_rate: f32,
    },
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if self.fallback_rules.is_some() && self.knowledge_base.is_none() {
            return Err("--fallback-rules requires --knowledge-base".to_string());
        }

        if let Command::Eval { min_pass_rate, .. } = &self.command {
            if !(0.0..=1.0).contains(min_pass_rate) {
                return Err("min-pass-rate must be within 0.0..=1.0".to_string());
            }
        }

        Ok(())
    }

    pub fn question(&self) -> Option<String> {
        match &self.command {
            Command::Ask { question, .. } => Some(question.join(" ")),
            _ => None,
        }
    }
}
