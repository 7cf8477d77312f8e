use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn bin() -> Command {
    let path = assert_cmd::cargo::cargo_bin!("faq-match");
    let mut cmd = Command::new(path);
    cmd.env_remove("FAQ_MATCH_FAQ")
        .env_remove("FAQ_MATCH_INTENTS")
        .env_remove("FAQ_MATCH_PRESENTATION")
        .env_remove("RUST_LOG");
    cmd
}

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

fn write_faq(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("faq.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 1, "question": "Qual o horário?", "answer": "18h-23h", "keywords": ["horario", "funcionamento"]},
            {"id": 2, "question": "Tem estacionamento?", "answer": "Sim", "keywords": ["estacionamento", "vaga"]}
        ]"#,
    )
    .expect("write faq");
    path
}

fn resolve_json(args: &[&str]) -> Value {
    let assert = bin().args(args).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn resolve_answers_from_faq_file() {
    let dir = TempDir::new().unwrap();
    let faq = write_faq(&dir);

    // Empty intent table so "horario" reaches scoring.
    let intents = dir.path().join("intents.json");
    std::fs::write(&intents, "[]").unwrap();

    let json = resolve_json(&[
        "--faq",
        faq.to_str().unwrap(),
        "--intents",
        intents.to_str().unwrap(),
        "--format",
        "json",
        "resolve",
        "qual o horario de vocês",
    ]);
    assert_eq!(json["kind"], "answer");
    assert_eq!(json["entry_id"], "1");
    assert_eq!(json["answer"], "18h-23h");
    assert_eq!(json["score"], 2);
    assert_eq!(json["suggestions"][0], "Onde fica a loja?");
}

#[test]
fn greeting_short_circuits_with_builtin_intents() {
    bin()
        .args(["resolve", "Olá"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind=intent trigger=ola"))
        .stdout(predicate::str::contains("suggestion=Ver Cardápio"));
}

#[test]
fn nonsense_gets_no_match_defaults() {
    let json = resolve_json(&["--format", "json", "resolve", "xyzzy plugh"]);
    assert_eq!(json["kind"], "fallback");
    assert!(json.get("answer").is_none());
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[4], "Falar com humano");
}

#[test]
fn missing_faq_file_warns_and_falls_back() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    bin()
        .args(["--faq", missing.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("faqs=0 intents=16"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let faq = dir.path().join("faq.json");
    std::fs::write(
        &faq,
        r#"[{"id": "a", "question": "Q1", "answer": "A1"}, {"id": "a", "question": "Q2", "answer": "A2"}]"#,
    )
    .unwrap();

    bin()
        .args(["--faq", faq.to_str().unwrap(), "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate faq id: a"));
}

#[test]
fn tokens_shows_stopword_filtering() {
    bin()
        .args(["tokens", "Qual é o HORÁRIO de vocês?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens=qual e o horario de voces?"))
        .stdout(predicate::str::contains("scoring=horario qual voces?"));
}

#[test]
fn welcome_and_quick_replies() {
    let presentation = data_file("apresentacao.json");

    bin()
        .args(["--presentation", presentation.to_str().unwrap(), "welcome"])
        .assert()
        .success()
        .stdout(predicate::str::contains("option=cardapio"));

    bin()
        .args(["option", "horario"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18h às 23h"));

    bin()
        .args(["option", "delivery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown quick-reply option"));
}

#[test]
fn bundled_eval_cases_pass() {
    let faq = data_file("faq.json");
    let intents = data_file("intents.json");
    let cases = data_file("eval_cases.json");

    let json = resolve_json(&[
        "--faq",
        faq.to_str().unwrap(),
        "--intents",
        intents.to_str().unwrap(),
        "--format",
        "json",
        "eval",
        "--cases",
        cases.to_str().unwrap(),
    ]);
    assert_eq!(json["total"], 8);
    assert_eq!(json["failed"], 0);
}

#[test]
fn eval_below_required_rate_fails() {
    let dir = TempDir::new().unwrap();
    let cases = dir.path().join("cases.json");
    std::fs::write(
        &cases,
        r#"[{"case_id": "c1", "input": "oi", "expected_kind": "answer"}]"#,
    )
    .unwrap();

    bin()
        .args(["eval", "--cases", cases.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("case=c1 passed=false kind=Intent"))
        .stderr(predicate::str::contains("below required"));
}
