use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const GENERIC_REPLY_MARKERS: [&str; 5] = [
    "Could you be more specific",
    "I'm here to help with civic issue reporting",
    "That's a great question!",
    "I'm not sure I understand that question",
    "Let me help you better",
];

fn bin() -> Command {
    let path = assert_cmd::cargo::cargo_bin!("jan-samasya");
    let mut cmd = Command::new(path);
    cmd.env_remove("JAN_SAMASYA_KB").env_remove("JAN_SAMASYA_RULES");
    cmd
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn ask_prints_the_matching_answer() {
    bin()
        .args(["ask", "How", "do", "I", "report", "an", "issue?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("To report an issue: 1) Click"));
}

#[test]
fn ask_json_describes_the_match() {
    let assert = bin()
        .args(["--output", "json", "ask", "can I stay anonymous"])
        .assert()
        .success();

    let json = stdout_json(&assert);
    assert_eq!(json["matched"], true);
    assert_eq!(json["entry_id"], "9");
    assert_eq!(json["phase"], "keyword");
    assert_eq!(json["trigger"], "anonymous");
}

#[test]
fn ask_without_match_falls_back_to_a_generic_reply() {
    let assert = bin().args(["ask", "good morning"]).assert().success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(
        GENERIC_REPLY_MARKERS.iter().any(|m| output.contains(m)),
        "unexpected reply: {output}"
    );
}

#[test]
fn ask_no_fallback_exits_with_failure() {
    let assert = bin()
        .args(["ask", "--no-fallback", "--output", "json", "good morning"])
        .assert()
        .failure();

    let json = stdout_json(&assert);
    assert_eq!(json["matched"], false);
    assert!(json.get("answer").is_none());
}

#[test]
fn category_lists_exact_matches_in_order() {
    let assert = bin()
        .args(["--output", "json", "category", "Support"])
        .assert()
        .success();

    let json = stdout_json(&assert);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["7", "13"]);

    bin()
        .args(["category", "support"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn random_is_reproducible_with_a_seed() {
    let first = bin().args(["random", "--seed", "11"]).assert().success();
    let second = bin().args(["random", "--seed", "11"]).assert().success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
    assert!(!first.get_output().stdout.is_empty());
}

#[test]
fn exported_knowledge_base_can_be_loaded_back() {
    let dir = tempfile::tempdir().unwrap();
    let entries = dir.path().join("faq.jsonl");
    let rules = dir.path().join("rules.jsonl");

    bin()
        .arg("export")
        .arg("--entries")
        .arg(&entries)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success();

    let assert = bin()
        .arg("--knowledge-base")
        .arg(&entries)
        .arg("--fallback-rules")
        .arg(&rules)
        .args(["--output", "json", "ask", "photography tips"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    assert_eq!(json["entry_id"], "5");
    assert_eq!(json["phase"], "fallback");

    // Without a rule file a custom table has no fallback phase.
    let assert = bin()
        .arg("--knowledge-base")
        .arg(&entries)
        .args(["--output", "json", "ask", "--no-fallback", "photography tips"])
        .assert()
        .failure();
    assert_eq!(stdout_json(&assert)["matched"], false);
}

#[test]
fn broken_knowledge_base_reports_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let entries = dir.path().join("bad.jsonl");
    std::fs::write(&entries, "{\"id\": \"1\"}\n").unwrap();

    bin()
        .arg("--knowledge-base")
        .arg(&entries)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("bad.jsonl:1")));
}

#[test]
fn eval_passes_and_fails_against_the_required_rate() {
    let dir = tempfile::tempdir().unwrap();
    let cases = dir.path().join("cases.json");
    std::fs::write(
        &cases,
        r#"[
            {"case_id": "report", "question": "How do I report an issue?", "expected_entry_id": "1"},
            {"case_id": "status", "question": "WHAT IS THE STATUS OF MY COMPLAINT", "expected_entry_id": "2"},
            {"case_id": "greeting", "question": "good morning", "expected_entry_id": null},
            {"case_id": "wrong", "question": "can I stay anonymous", "expected_entry_id": "13"}
        ]"#,
    )
    .unwrap();

    let assert = bin()
        .arg("--output")
        .arg("json")
        .arg("eval")
        .arg("--cases")
        .arg(&cases)
        .args(["--min-pass-rate", "0.75"])
        .assert()
        .success();
    let json = stdout_json(&assert);
    assert_eq!(json["total"], 4);
    assert_eq!(json["passed"], 3);

    bin()
        .arg("eval")
        .arg("--cases")
        .arg(&cases)
        .assert()
        .failure()
        .stdout(predicate::str::contains("meets_threshold=false"))
        .stderr(predicate::str::contains("below the required"));
}

fn read_transcript(path: &std::path::Path) -> Vec<Value> {
    let text = std::fs::read_to_string(path).unwrap();
    let json: Value = serde_json::from_str(&text).unwrap();
    json.as_array().unwrap().clone()
}

fn assert_chat_transcript(messages: &[Value]) {
    let ids: Vec<u64> = messages.iter().map(|m| m["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let senders: Vec<&str> = messages
        .iter()
        .map(|m| m["sender"].as_str().unwrap())
        .collect();
    assert_eq!(senders, vec!["bot", "user", "bot", "user", "bot"]);

    assert_eq!(messages[1]["content"], "can I stay anonymous");
    assert!(
        messages[2]["content"]
            .as_str()
            .unwrap()
            .starts_with("Yes, you can report issues anonymously.")
    );
    assert_eq!(messages[3]["content"], "good morning");
    let generic = messages[4]["content"].as_str().unwrap();
    assert!(
        GENERIC_REPLY_MARKERS.iter().any(|m| generic.contains(m)),
        "unexpected reply: {generic}"
    );
}

#[test]
fn chat_stops_on_quit_and_writes_the_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = dir.path().join("chat.json");

    bin()
        .args(["--seed", "1", "chat", "--transcript"])
        .arg(&transcript)
        .write_stdin("can I stay anonymous\n\ngood morning\nquit\nhow do I report?\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hi! I'm CivicBot")
                .and(predicate::str::contains("Quick questions:"))
                .and(predicate::str::contains(
                    "bot> Yes, you can report issues anonymously.",
                )),
        );

    // Nothing after `quit` is sent and the blank line adds no messages.
    assert_chat_transcript(&read_transcript(&transcript));
}

#[test]
fn chat_stops_on_end_of_input() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = dir.path().join("chat.json");

    bin()
        .args(["--seed", "1", "chat", "--transcript"])
        .arg(&transcript)
        .write_stdin("can I stay anonymous\n   \ngood morning\n")
        .assert()
        .success();

    assert_chat_transcript(&read_transcript(&transcript));
}
