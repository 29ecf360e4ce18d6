use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{FaqError, Result};
use crate::faq::{FaqMatcher, MatchPhase};

pub const DEFAULT_REQUIRED_PASS_RATE: f32 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalCase {
    pub case_id: String,
    pub question: String,
    /// `None` means the question should not match anything.
    #[serde(default)]
    pub expected_entry_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub case_id: String,
    pub passed: bool,
    pub expected_entry_id: Option<String>,
    pub actual_entry_id: Option<String>,
    pub phase: Option<MatchPhase>,
    pub latency_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f32,
    pub outcomes: Vec<EvalOutcome>,
}

impl EvalSummary {
    pub fn meets(&self, required_pass_rate: f32) -> bool {
        self.pass_rate >= required_pass_rate
    }
}

pub fn read_eval_cases_json(path: &Path) -> Result<Vec<EvalCase>> {
    let file = File::open(path).map_err(|source| FaqError::File {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| FaqError::Parse {
        path: path.to_path_buf(),
        line: source.line(),
        source,
    })
}

pub fn evaluate_cases(matcher: &FaqMatcher, cases: &[EvalCase]) -> EvalSummary {
    let mut outcomes = Vec::with_capacity(cases.len());

    for case in cases {
        let start = Instant::now();
        let hit = matcher.find_match(&case.question);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let actual_entry_id = hit.map(|m| m.entry.id.clone());
        outcomes.push(EvalOutcome {
            case_id: case.case_id.clone(),
            passed: actual_entry_id == case.expected_entry_id,
            expected_entry_id: case.expected_entry_id.clone(),
            actual_entry_id,
            phase: hit.map(|m| m.phase),
            latency_ms,
        });
    }

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = total.saturating_sub(passed);
    let pass_rate = if total == 0 {
        0.0
    } else {
        passed as f32 / total as f32
    };

    EvalSummary {
        total,
        passed,
        failed,
        pass_rate,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: &str, question: &str, expected: Option<&str>) -> EvalCase {
        EvalCase {
            case_id: id.to_string(),
            question: question.to_string(),
            expected_entry_id: expected.map(str::to_string),
        }
    }

    #[test]
    fn scores_hits_and_misses() {
        let matcher = FaqMatcher::builtin().expect("matcher");
        let cases = vec![
            case("c1", "How do I report an issue?", Some("1")),
            case("c2", "good morning", None),
            case("c3", "photography tips", Some("5")),
            case("c4", "can I stay anonymous", Some("13")),
        ];

        let summary = evaluate_cases(&matcher, &cases);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.failed, 1);
        assert!((summary.pass_rate - 0.75).abs() < 1e-6);
        assert!(summary.meets(0.7));
        assert!(!summary.meets(DEFAULT_REQUIRED_PASS_RATE));

        let c3 = &summary.outcomes[2];
        assert_eq!(c3.phase, Some(MatchPhase::Fallback));
        let c4 = &summary.outcomes[3];
        assert!(!c4.passed);
        assert_eq!(c4.actual_entry_id.as_deref(), Some("9"));
    }

    #[test]
    fn empty_case_list_has_zero_pass_rate() {
        let matcher = FaqMatcher::builtin().expect("matcher");
        let summary = evaluate_cases(&matcher, &[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.pass_rate, 0.0);
    }

    #[test]
    fn malformed_case_file_names_path_and_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cases.json");
        std::fs::write(&path, "[\n  {\"case_id\": \"a\"}\n]\n").expect("write");

        let err = read_eval_cases_json(&path).expect_err("missing question");
        assert!(matches!(err, FaqError::Parse { line: 2, .. }), "{err:?}");
        assert!(err.to_string().contains("cases.json:2"), "{err}");
    }

    #[test]
    fn missing_expectation_deserializes_as_no_match() {
        let cases: Vec<EvalCase> =
            serde_json::from_str(r#"[{"case_id":"a","question":"hi"}]"#).expect("json");
        assert_eq!(cases[0].expected_entry_id, None);
    }
}
