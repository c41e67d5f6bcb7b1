#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{write_lp, SAMPLE_LP};
use lpcompare_core::parse::ModelBuilder;
use lpcompare_core::{
    parse_model_str, read_model, read_model_file, BoundOperator, LpCompareError, ModelStats,
};
use std::io::Cursor;

#[test]
fn test_sample_model_sections() {
    let model = parse_model_str(SAMPLE_LP).unwrap();

    assert_eq!(model.generals, vec!["x", "y"]);
    assert_eq!(model.binaries, vec!["b1", "b2"]);
    assert_eq!(model.sos_variables, vec!["s1", "s2"]);
    assert_eq!(model.bounds.len(), 4);
    assert_eq!(model.constraints.len(), 3);

    let c2 = &model.constraints[1];
    assert_eq!(c2.name(), Some("c2"));
    assert_eq!(c2.terms().len(), 3);

    let w = model
        .bounds
        .iter()
        .find(|b| b.variable_name == "w")
        .unwrap();
    assert_eq!(w.lower_operator, BoundOperator::Equal);
}

#[test]
fn test_stats() {
    let model = parse_model_str(SAMPLE_LP).unwrap();
    assert_eq!(
        model.stats(),
        ModelStats {
            generals: 2,
            binaries: 2,
            sos_variables: 2,
            bounds: 4,
            constraints: 3,
        }
    );
    assert_eq!(
        model.stats().to_string(),
        "Binaries: 2\nBounds: 4\nConstraints: 3\nGenerals: 2\nSosVars: 2\n"
    );
}

#[test]
fn test_headers_are_case_insensitive_synonyms() {
    let model = parse_model_str("SUBJECT TO\n c: x >= 1\nbound\n x <= 2\nGEN\n x\nbin\n y\n").unwrap();
    assert_eq!(model.constraints.len(), 1);
    assert_eq!(model.bounds.len(), 1);
    assert_eq!(model.generals, vec!["x"]);
    assert_eq!(model.binaries, vec!["y"]);
}

#[test]
fn test_unknown_section_content_is_skipped() {
    let model = parse_model_str("Semi-Continuous\n x\nBounds\n x <= 1\n").unwrap();
    assert!(model.generals.is_empty());
    assert_eq!(model.bounds.len(), 1);
}

#[test]
fn test_unindented_line_closes_section_and_is_reconsidered() {
    let model = parse_model_str("Bounds\n x <= 1\nGenerals\n x\n").unwrap();
    assert_eq!(model.bounds.len(), 1);
    assert_eq!(model.generals, vec!["x"]);
}

#[test]
fn test_pending_row_flushed_at_end_of_input() {
    let model = parse_model_str("Subject To\n c1: x\n   + y >= 1").unwrap();
    assert_eq!(model.constraints.len(), 1);
}

#[test]
fn test_crlf_input() {
    let text = SAMPLE_LP.replace('\n', "\r\n");
    let model = read_model(Cursor::new(text.into_bytes())).unwrap();
    assert_eq!(model, parse_model_str(SAMPLE_LP).unwrap());
}

#[test]
fn test_invalid_number_reports_line() {
    let err = parse_model_str("Bounds\n x <= 1\n y <= abc\n").unwrap_err();
    assert_eq!(
        err,
        LpCompareError::InvalidNumber {
            token: "abc".to_string(),
            field: "bound value".to_string(),
            line: Some(3),
        }
    );
}

#[test]
fn test_builder_counts_lines() {
    let mut builder = ModelBuilder::new();
    for line in SAMPLE_LP.lines() {
        builder.push_line(line).unwrap();
    }
    assert_eq!(builder.lines_read(), SAMPLE_LP.lines().count() as u64);
}

#[test]
fn test_read_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lp(&dir, "a.lp", SAMPLE_LP);

    let model = read_model_file(&path).unwrap();
    assert_eq!(model.constraints.len(), 3);
}

#[test]
fn test_read_model_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.lp");

    let err = read_model_file(&path).unwrap_err();
    assert_eq!(
        err,
        LpCompareError::FileNotFound {
            path: path.display().to_string()
        }
    );
}
