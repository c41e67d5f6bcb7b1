#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{write_lp, SAMPLE_LP};
use lpcompare_core::{compare_files, CompareOptions, LpCompareError};

fn options_in(dir: &tempfile::TempDir) -> CompareOptions {
    CompareOptions {
        dump_dir: dir.path().to_path_buf(),
        ..CompareOptions::default()
    }
}

#[test]
fn test_default_options() {
    let options = CompareOptions::default();
    assert_eq!(options.dump_prefix, "diffdump");
    assert!(options.dump_diffs);
}

#[test]
fn test_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_lp(&dir, "a.lp", SAMPLE_LP);
    let b = write_lp(&dir, "b.lp", SAMPLE_LP);

    let outcome = compare_files(&a, &b, &options_in(&dir)).unwrap();
    assert!(outcome.diff.is_equivalent());
    assert_eq!(outcome.first_stats, outcome.second_stats);
    assert!(outcome.dump_files.is_empty());
}

#[test]
fn test_differences_are_dumped() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_lp(&dir, "a.lp", SAMPLE_LP);
    let b = write_lp(&dir, "b.lp", &SAMPLE_LP.replace(" c3: - x <= 4\n", ""));

    let outcome = compare_files(&a, &b, &options_in(&dir)).unwrap();
    assert_eq!(outcome.diff.constraints.only_in_first().len(), 1);
    assert_eq!(
        outcome.dump_files,
        vec![dir.path().join("diffdump-firstEXCEPTsecond-Constraints.log")]
    );

    let dump = std::fs::read_to_string(&outcome.dump_files[0]).unwrap();
    assert!(dump.starts_with("firstEXCEPTsecond Constraints\nName: c3\n"));
}

#[test]
fn test_dumps_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_lp(&dir, "a.lp", "Generals\n x\n");
    let b = write_lp(&dir, "b.lp", "Generals\n y\n");

    let options = CompareOptions {
        dump_diffs: false,
        ..options_in(&dir)
    };
    let outcome = compare_files(&a, &b, &options).unwrap();
    assert!(!outcome.diff.is_equivalent());
    assert!(outcome.dump_files.is_empty());
    assert!(!dir.path().join("diffdump-firstEXCEPTsecond-Generals.log").exists());
}

#[test]
fn test_missing_second_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_lp(&dir, "a.lp", SAMPLE_LP);
    let b = dir.path().join("b.lp");

    let err = compare_files(&a, &b, &options_in(&dir)).unwrap_err();
    assert!(matches!(err, LpCompareError::FileNotFound { .. }));
}

#[test]
fn test_outcome_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_lp(&dir, "a.lp", SAMPLE_LP);
    let b = write_lp(&dir, "b.lp", "Generals\n x y z\n");

    let outcome = compare_files(&a, &b, &options_in(&dir)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();

    assert_eq!(json["first_stats"]["constraints"], 3);
    assert_eq!(json["second_stats"]["generals"], 3);
    assert_eq!(json["diff"]["generals"]["only_in_second"][0], "z");
    assert_eq!(
        json["dump_files"].as_array().unwrap().len(),
        outcome.dump_files.len()
    );
}

#[test]
fn test_stats_json() {
    let stats = lpcompare_core::parse_model_str(SAMPLE_LP).unwrap().stats();
    let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
    assert_eq!(json["bounds"], 4);
    assert_eq!(json["sos_variables"], 2);
}

