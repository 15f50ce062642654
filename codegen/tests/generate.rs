//! End-to-end tests for writing tables to file destinations.

use std::fs;
use std::path::PathBuf;

use cos_table::{cos_sample, CosTable};
use cos_table_codegen::{generate, generate_for_count, render_chain, Destination, EmitError};
use proptest::prelude::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cos-table-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn default_table_written_to_file() {
    let dir = scratch_dir("default");
    let path = dir.join("nested").join("cos_table.txt");
    let report = generate_for_count(1024, &Destination::File(path.clone())).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(report.sample_count, 1024);
    assert_eq!(report.block_count, 1024);
    assert_eq!(report.bytes_written, text.len());
    assert_eq!(report.first_value.as_deref(), Some("1.0"));
    assert_eq!(text.lines().count(), 2048);
    assert!(text.starts_with("    if (i == 0)\n        return 1.0;\n    if (i == 1)\n"));
    assert!(text.ends_with(";\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rerun_is_byte_identical() {
    let dir = scratch_dir("rerun");
    let path = dir.join("cos_table.txt");
    generate_for_count(1024, &Destination::File(path.clone())).unwrap();
    let first = fs::read(&path).unwrap();
    generate_for_count(1024, &Destination::File(path.clone())).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn existing_file_is_truncated() {
    let dir = scratch_dir("truncate");
    let path = dir.join("cos_table.txt");
    generate_for_count(64, &Destination::File(path.clone())).unwrap();
    generate_for_count(2, &Destination::File(path.clone())).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = scratch_dir("unwritable");
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, b"").unwrap();

    let table = CosTable::generate(8).unwrap();
    let err = generate(&table, &Destination::File(blocker.join("cos_table.txt"))).unwrap_err();
    assert!(matches!(err, EmitError::Io { .. }), "got {err:?}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn zero_count_is_table_error() {
    let err = generate_for_count(0, &Destination::Stdout).unwrap_err();
    assert!(matches!(err, EmitError::Table(_)));
}

#[test]
fn report_serializes_to_json() {
    let dir = scratch_dir("json");
    let path = dir.join("cos_table.txt");
    let report = generate_for_count(16, &Destination::File(path)).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["sample_count"], 16);
    assert_eq!(json["first_value"], "1.0");

    let _ = fs::remove_dir_all(&dir);
}

/// Pulls `(index, value)` pairs back out of a rendered chain.
fn parse_pairs(text: &str) -> Vec<(usize, f64)> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .chunks(2)
        .map(|pair| {
            let index = pair[0]
                .trim()
                .strip_prefix("if (i == ")
                .and_then(|s| s.strip_suffix(')'))
                .unwrap()
                .parse()
                .unwrap();
            let value = pair[1]
                .trim()
                .strip_prefix("return ")
                .and_then(|s| s.strip_suffix(';'))
                .unwrap()
                .parse()
                .unwrap();
            (index, value)
        })
        .collect()
}

proptest! {
    /// Block count follows `n` and every value round-trips exactly.
    #[test]
    fn prop_chain_matches_table(n in 1usize..2048) {
        let table = CosTable::generate(n).unwrap();
        let pairs = parse_pairs(&render_chain(&table));
        prop_assert_eq!(pairs.len(), n);
        for (pos, (index, value)) in pairs.into_iter().enumerate() {
            prop_assert_eq!(index, pos);
            prop_assert_eq!(value.to_bits(), cos_sample(pos, n).to_bits());
        }
    }
}
