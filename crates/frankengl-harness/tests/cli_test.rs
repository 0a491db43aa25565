//! End-to-end tests for the `harness` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use frankengl_abi::gl::GlEntry;
use frankengl_harness::structured_log::validate_log_line;
use frankengl_harness::{DescriptorRow, PresenceEntry, PresenceReport};

fn harness(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(args)
        .env_remove("FRANKENGL_BIND_TRACE")
        .output()
        .expect("run harness binary")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("frankengl-cli-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn saved_report(dir: &Path, file: &str, pairs: &[(&str, bool)]) -> PathBuf {
    let report = PresenceReport {
        table: "GL".to_string(),
        strategy: "shared-library".to_string(),
        generation: 1,
        bound: pairs.iter().filter(|(_, b)| *b).count(),
        unbound: pairs.iter().filter(|(_, b)| !*b).count(),
        entries: pairs
            .iter()
            .map(|&(name, bound)| PresenceEntry {
                name: name.to_string(),
                bound,
            })
            .collect(),
    };
    let path = dir.join(file);
    report.save(&path).expect("save report");
    path
}

#[test]
fn descriptors_lists_the_whole_table() {
    let output = harness(&["descriptors"]);
    assert!(output.status.success());
    let rows: Vec<DescriptorRow> = serde_json::from_slice(&output.stdout).expect("descriptor json");
    assert_eq!(rows.len(), GlEntry::COUNT);
    assert_eq!(rows[0].name, GlEntry::ALL[0].symbol());
}

#[test]
fn descriptors_filter_by_shape() {
    let output = harness(&["descriptors", "--shape", "string-out"]);
    assert!(output.status.success());
    let rows: Vec<DescriptorRow> = serde_json::from_slice(&output.stdout).expect("descriptor json");
    assert!(rows.iter().any(|row| row.name == "glGetString"));
    assert!(rows.iter().all(|row| row.shape == "string-out"));

    let rejected = harness(&["descriptors", "--shape", "vector"]);
    assert!(!rejected.status.success());
}

#[test]
fn json_report_covers_every_entry_point() {
    let output = harness(&["report", "--format", "json"]);
    assert!(output.status.success());
    let report = PresenceReport::from_json(&String::from_utf8_lossy(&output.stdout))
        .expect("presence report json");
    assert_eq!(report.table, "GL");
    assert_eq!(report.entries.len(), GlEntry::COUNT);
    assert_eq!(report.bound + report.unbound, GlEntry::COUNT);
    assert_eq!(report.generation, 1);
}

#[test]
fn jsonl_report_is_schema_valid() {
    let output = harness(&["report", "--format", "jsonl", "--run-id", "ci"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), GlEntry::COUNT + 1);
    for (i, line) in lines.iter().enumerate() {
        let entry = validate_log_line(line, i + 1).expect("valid log line");
        assert!(entry.trace_id.starts_with("GL::ci::"));
    }
    assert!(lines[0].contains("\"event\":\"bind_pass\""));
}

#[test]
fn columns_report_has_one_line_per_pair() {
    let output = harness(&["report"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), GlEntry::COUNT.div_ceil(2));
    assert!(
        stdout
            .lines()
            .all(|line| line.starts_with("   [+] ") || line.starts_with("   [ ] "))
    );
    assert!(stdout.ends_with('\n') && !stdout.ends_with("\n\n"));
}

#[test]
fn columns_report_written_to_file_matches_stdout() {
    let dir = scratch_dir("columns");
    let path = dir.join("columns.txt");
    let output = harness(&["report", "--output", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&path).expect("read columns file");
    assert_eq!(written.lines().count(), GlEntry::COUNT.div_ceil(2));
    assert!(written.lines().all(|line| !line.trim().is_empty()));
    assert_eq!(written, String::from_utf8_lossy(&harness(&["report"]).stdout));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn check_rejects_names_outside_the_table() {
    let output = harness(&["check", "--require", "glClear", "glFrankenNotAThing"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("glFrankenNotAThing"));
}

#[test]
fn compare_identical_reports_succeeds_silently() {
    let dir = scratch_dir("same");
    let a = saved_report(&dir, "a.json", &[("glClear", true), ("glFlush", false)]);
    let b = saved_report(&dir, "b.json", &[("glClear", true), ("glFlush", false)]);
    let output = harness(&["compare", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn compare_reports_presence_changes() {
    let dir = scratch_dir("differ");
    let a = saved_report(&dir, "a.json", &[("glClear", true), ("glFlush", false)]);
    let b = saved_report(&dir, "b.json", &[("glClear", false), ("glFlush", true)]);
    let output = harness(&["compare", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "+glFlush\n-glClear\n");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn compare_fails_on_missing_file() {
    let output = harness(&["compare", "/nonexistent/a.json", "/nonexistent/b.json"]);
    assert!(!output.status.success());
}
