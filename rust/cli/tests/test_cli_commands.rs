use fairdeal_cli::run;
use serial_test::serial;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["fairdeal"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn shuffle_then_verify_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("audit").join("shuffles.jsonl");
    let log_str = log.to_str().unwrap();

    for _ in 0..3 {
        let (code, out, _) = run_cli(&["shuffle", "--audit-log", log_str]);
        assert_eq!(code, 0);
        assert!(out.contains("Deck: "));
        assert!(out.contains("Seed hash: "));
    }

    let (code, out, err) = run_cli(&["verify", "--input", log_str]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Records: 3"));
    assert!(out.contains("Verify: OK"));
}

#[test]
#[serial]
fn shuffle_uses_given_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("shuffles.jsonl");
    let table = "6f1c1c4e-3b8a-4d8e-9a3e-2f3b6c7d8e9f";
    let hand = "0b7a9d5c-1e2f-4a3b-8c4d-5e6f7a8b9c0d";

    let (code, out, _) = run_cli(&[
        "shuffle",
        "--table-id",
        table,
        "--hand-id",
        hand,
        "--audit-log",
        log.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(out.contains(&format!("Table: {}", table)));
    assert!(out.contains(&format!("Hand: {}", hand)));
    let line = std::fs::read_to_string(&log).unwrap();
    assert!(line.contains(table));
    assert!(line.contains(hand));
}

#[test]
#[serial]
fn shuffle_without_log_warns_and_prints_event() {
    let (code, out, err) = run_cli(&["shuffle"]);
    assert_eq!(code, 0);
    assert!(err.contains("WARNING: no audit log configured"));
    assert!(out.contains("Audit: {"));
}

#[test]
fn verify_flags_tampered_record() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("shuffles.jsonl");
    let log_str = log.to_str().unwrap();
    let (code, _, _) = run_cli(&["shuffle", "--audit-log", log_str]);
    assert_eq!(code, 0);

    let content = std::fs::read_to_string(&log).unwrap();
    let mut v: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    v["algorithm"] = serde_json::Value::String("riffle".into());
    std::fs::write(&log, format!("{}\n", v)).unwrap();

    let (code, out, err) = run_cli(&["verify", "--input", log_str]);
    assert_eq!(code, 2);
    assert!(out.contains("Verify: FAILED"));
    assert!(err.contains("Invalid record 1"));
}

#[test]
fn verify_checks_records_after_a_torn_line() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("shuffles.jsonl");
    let log_str = log.to_str().unwrap();

    let (code, _, _) = run_cli(&["shuffle", "--audit-log", log_str]);
    assert_eq!(code, 0);
    // Simulate a crash partway through the next append.
    let first = std::fs::read_to_string(&log).unwrap();
    let torn = &first.trim_end()[..first.len() / 2];
    std::fs::write(&log, format!("{}{}\n", first, torn)).unwrap();
    let (code, _, _) = run_cli(&["shuffle", "--audit-log", log_str]);
    assert_eq!(code, 0);

    let (code, out, err) = run_cli(&["verify", "--input", log_str]);
    assert_eq!(code, 2);
    assert!(out.contains("Records: 3"));
    assert!(out.contains("Verify: FAILED (1 errors)"));
    assert!(err.contains("Invalid record 2"));
    assert!(!err.contains("Invalid record 1:"));
    assert!(!err.contains("Invalid record 3"));
}

#[test]
fn verify_missing_file_fails() {
    let (code, _, err) = run_cli(&["verify", "--input", "/nonexistent/fairdeal/audit.jsonl"]);
    assert_eq!(code, 2);
    assert!(err.contains("Error:"));
}

#[test]
fn verify_seed_requires_hand_id() {
    let (code, _, err) = run_cli(&["verify", "--input", "x.jsonl", "--seed", "00"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: fairdeal"));
}

#[test]
fn verify_hand_id_requires_seed() {
    let (code, _, err) = run_cli(&[
        "verify",
        "--input",
        "x.jsonl",
        "--hand-id",
        "0b7a9d5c-1e2f-4a3b-8c4d-5e6f7a8b9c0d",
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("--seed"));
    assert!(err.contains("Usage: fairdeal"));
}

#[test]
fn eval_reports_winner_and_split() {
    let (code, out, _) = run_cli(&[
        "eval",
        "--hand",
        "AS KS QS JS TS 2H 3D",
        "--hand",
        "2C 2D 2H 2S 5H 6H 7H",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Royal Flush [A]"));
    assert!(out.contains("Four of a Kind [2 7]"));
    assert!(out.contains("Winner: 1"));

    let (code, out, _) = run_cli(&[
        "eval",
        "--hand",
        "5C 6H 7C 8H 9D 2S 2C",
        "--hand",
        "5C 6H 7C 8H 9D 3S 3H",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Split pot: 1, 2"));
}

#[test]
fn eval_rejects_bad_hand() {
    let (code, _, err) = run_cli(&["eval", "--hand", "AS KS"]);
    assert_eq!(code, 2);
    assert!(err.contains("hand 1"));
}

#[test]
fn rng_prints_sample() {
    let seed = "01".repeat(40);
    let (code, out, _) = run_cli(&["rng", "--seed", &seed, "--count", "3"]);
    assert_eq!(code, 0);
    assert!(out.contains("RNG sample:"));
    let (_, again, _) = run_cli(&["rng", "--seed", &seed, "--count", "3"]);
    assert_eq!(out, again);
}

#[test]
fn bench_reports_timing() {
    let (code, out, _) = run_cli(&["bench", "--iterations", "100"]);
    assert_eq!(code, 0);
    assert!(out.contains("Benchmark: 100 iters"));
}

#[test]
fn help_goes_to_stdout() {
    let (code, out, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("shuffle"));
    assert!(out.contains("verify"));
}

#[test]
fn unknown_command_lists_commands() {
    let (code, _, err) = run_cli(&["deal"]);
    assert_eq!(code, 2);
    for c in ["shuffle", "verify", "eval", "rng", "bench", "cfg"] {
        assert!(err.contains(c), "missing {} in usage", c);
    }
}
