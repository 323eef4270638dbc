use fairdeal_cli::run;
use serde_json::Value;
use serial_test::serial;

const KEYS: [&str; 4] = [
    "FAIRDEAL_CONFIG",
    "FAIRDEAL_AUDIT_LOG",
    "FAIRDEAL_TABLE_ID",
    "FAIRDEAL_BENCH_ITERATIONS",
];

struct EnvGuard;

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        for key in KEYS {
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in KEYS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }
}

fn cfg_json() -> (i32, Value) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["fairdeal", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json)
}

#[test]
#[serial]
fn file_values_are_marked_as_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("fairdeal.toml");
    std::fs::write(
        &file,
        "table_id = \"6f1c1c4e-3b8a-4d8e-9a3e-2f3b6c7d8e9f\"\nbench_iterations = 7\n",
    )
    .unwrap();
    let _env = EnvGuard::apply(&[("FAIRDEAL_CONFIG", file.to_str().unwrap())]);

    let (code, json) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["table_id"]["value"], "6f1c1c4e-3b8a-4d8e-9a3e-2f3b6c7d8e9f");
    assert_eq!(json["table_id"]["source"], "file");
    assert_eq!(json["bench_iterations"]["value"], 7);
    assert_eq!(json["audit_log"]["source"], "default");
}

#[test]
#[serial]
fn env_beats_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("fairdeal.toml");
    std::fs::write(&file, "bench_iterations = 7\n").unwrap();
    let _env = EnvGuard::apply(&[
        ("FAIRDEAL_CONFIG", file.to_str().unwrap()),
        ("FAIRDEAL_BENCH_ITERATIONS", "9"),
    ]);

    let (code, json) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["bench_iterations"]["value"], 9);
    assert_eq!(json["bench_iterations"]["source"], "env");
}

#[test]
#[serial]
fn zero_bench_iterations_is_rejected() {
    let _env = EnvGuard::apply(&[("FAIRDEAL_BENCH_ITERATIONS", "0")]);
    let (code, _) = cfg_json();
    assert_eq!(code, 2);
}

#[test]
#[serial]
fn configured_audit_log_is_used_by_shuffle() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("configured.jsonl");
    let _env = EnvGuard::apply(&[("FAIRDEAL_AUDIT_LOG", log.to_str().unwrap())]);

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["fairdeal", "shuffle"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(err.is_empty(), "unexpected warning: {}", String::from_utf8_lossy(&err));
    assert_eq!(std::fs::read_to_string(&log).unwrap().lines().count(), 1);
}
