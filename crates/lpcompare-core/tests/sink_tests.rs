#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::double_sided;
use lpcompare_core::diff::sink::{render_dump, FIRST_EXCEPT_SECOND, SECOND_EXCEPT_FIRST};
use lpcompare_core::diff::{diff_models, FileDumpSink, MemorySink};
use lpcompare_core::{parse_bound, parse_model_str, DiffCategory, DiffSink, LpCompareError};

#[test]
fn test_render_dump_header_and_items() {
    let text = render_dump(
        FIRST_EXCEPT_SECOND,
        DiffCategory::Bounds,
        &[double_sided("x", 0.0, 10.0)],
    );
    assert_eq!(text, "firstEXCEPTsecond Bounds\n0 <= x <= 10\n");
}

#[test]
fn test_dumped_bound_reparses() {
    let original = double_sided("x", -2.5, 10.0);
    let text = render_dump(SECOND_EXCEPT_FIRST, DiffCategory::Bounds, &[original.clone()]);
    let line = text.lines().nth(1).unwrap();
    assert_eq!(parse_bound(line).unwrap().unwrap(), original);
}

#[test]
fn test_memory_sink_collects_every_category() {
    let a = parse_model_str("Subject To\n c1: 2 x1 - x2 = 5\n").unwrap();
    let b = parse_model_str("").unwrap();

    let mut sink = MemorySink::new();
    sink.write_model_diff(&diff_models(&a, &b)).unwrap();

    assert_eq!(sink.categories().len(), 5);
    let constraints = sink.get(DiffCategory::Constraints).unwrap();
    assert_eq!(
        constraints.only_in_first,
        vec!["Name: c1\n  5 =\n  2 * x1\n  -1 * x2\n".to_string()]
    );
    assert!(constraints.only_in_second.is_empty());
}

#[test]
fn test_file_sink_writes_only_non_empty_sides() {
    let dir = tempfile::tempdir().unwrap();
    let a = parse_model_str("Generals\n x\nBounds\n x <= 1\n").unwrap();
    let b = parse_model_str("Generals\n y\n").unwrap();

    let mut sink = FileDumpSink::new(dir.path(), "run");
    sink.write_model_diff(&diff_models(&a, &b)).unwrap();

    let names: Vec<String> = sink
        .written()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "run-firstEXCEPTsecond-Generals.log",
            "run-secondEXCEPTfirst-Generals.log",
            "run-firstEXCEPTsecond-Bounds.log",
        ]
    );

    let generals = std::fs::read_to_string(dir.path().join("run-secondEXCEPTfirst-Generals.log")).unwrap();
    assert_eq!(generals, "secondEXCEPTfirst Generals\ny\n");
    assert!(!sink
        .dump_path(SECOND_EXCEPT_FIRST, DiffCategory::Bounds)
        .exists());
}

#[test]
fn test_file_sink_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let mut sink = FileDumpSink::new(&missing, "p");
    let err = sink
        .write_category(DiffCategory::Generals, &["x".to_string()], &[])
        .unwrap_err();
    assert!(matches!(err, LpCompareError::DumpWrite { .. }));
}
