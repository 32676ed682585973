//! Public assertion surface: the panicking entry points, the name-capture
//! macros, and the pluggable renderers.

use std::fs;

use serde::Serialize;
use snaptest::{assert_bytes_snapshot, assert_snapshot, test_name, Config, JsonRender};

#[derive(Debug, Serialize)]
struct Report {
    title: &'static str,
    passed: u32,
    failed: u32,
}

fn sample_report() -> Report {
    Report {
        title: "nightly",
        passed: 14,
        failed: 0,
    }
}

fn config_in(dir: &std::path::Path) -> Config {
    Config::builder().directory(dir).build().unwrap()
}

#[test]
fn test_name_macro_captures_this_function() {
    let name = test_name!();
    assert!(name.ends_with("test_name_macro_captures_this_function"));
    assert!(name.contains("::"));
}

#[test]
fn value_assertion_records_the_structural_dump() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    config.assert("report dump", &sample_report());

    let stored = fs::read_to_string(dir.path().join("report-dump.snap")).unwrap();
    assert_eq!(stored, format!("{:#?}\n", sample_report()));
    assert!(stored.contains("Report"));
    assert!(stored.contains("\"nightly\""));

    // Second run compares equal against the recording.
    config.assert("report dump", &sample_report());
}

#[test]
fn json_renderer_is_substitutable() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    config.assert_with("report json", &sample_report(), &JsonRender);

    let stored = fs::read_to_string(dir.path().join("report-json.snap")).unwrap();
    assert!(stored.contains("\"title\": \"nightly\""));
    assert!(stored.contains("\"passed\": 14"));

    config.assert_with("report json", &sample_report(), &JsonRender);
}

#[test]
fn byte_assertion_stores_bytes_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let payload: &[u8] = &[0xDE, 0xAD, 0xBE, 0xEF];

    config.assert_bytes("opaque", payload);
    config.assert_bytes("opaque", payload);
    assert_eq!(fs::read(dir.path().join("opaque.snap")).unwrap(), payload);
}

#[test]
fn snapshot_macro_names_the_file_after_the_test() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    assert_snapshot!(config, sample_report());
    assert_snapshot!(config, sample_report());

    let entries: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("snapshot_macro_names_the_file_after_the_test"));
    assert!(entries[0].ends_with(".snap"));
}

#[test]
fn bytes_macro_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    assert_bytes_snapshot!(config, b"raw payload");
    assert_bytes_snapshot!(config, b"raw payload");
}

#[test]
#[should_panic(expected = "Snapshot test failed for: drifting")]
fn mismatch_panics_with_the_diff() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(dir.path().join("drifting.snap"), "a\nb\nc\n").unwrap();

    config.assert_bytes("drifting", b"a\nX\nc\n");
}

#[test]
#[should_panic(expected = "No snapshot directory exists")]
fn missing_directory_panics_fatally() {
    let root = tempfile::tempdir().unwrap();
    let config = config_in(&root.path().join("absent"));

    config.assert_bytes("anything", b"data\n");
}
