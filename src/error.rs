use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Knowledge base has no entries")]
    EmptyTable,

    #[error("Duplicate FAQ id: {0}")]
    DuplicateId(String),

    #[error("Fallback rule '{pattern}' references unknown FAQ id {entry_id}")]
    UnknownEntry { pattern: String, entry_id: String },

    #[error("Invalid fallback pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Pass rate {pass_rate:.4} is below the required {required:.4}")]
    EvalBelowThreshold { pass_rate: f32, required: f32 },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FaqError>;
