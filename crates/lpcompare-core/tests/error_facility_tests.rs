use lpcompare_core::errors::{LpCompareError, LpError, LpErrorKind};

#[test]
fn test_invalid_number_maps_to_structured_error() {
    let err = LpCompareError::InvalidNumber {
        token: "1e".to_string(),
        field: "coefficient".to_string(),
        line: Some(42),
    };

    let lp_err: LpError = err.into();

    assert_eq!(lp_err.kind(), LpErrorKind::InvalidNumber);
    assert_eq!(lp_err.code(), "ERR_INVALID_NUMBER");
    assert_eq!(lp_err.line(), Some(42));
    assert_eq!(lp_err.token(), Some("1e"));
    assert!(lp_err.message().contains("coefficient"));
}

#[test]
fn test_file_not_found_carries_path() {
    let lp_err: LpError = LpCompareError::FileNotFound {
        path: "models/a.lp".to_string(),
    }
    .into();

    assert_eq!(lp_err.kind(), LpErrorKind::NotFound);
    assert_eq!(lp_err.path(), Some("models/a.lp"));
    assert_eq!(lp_err.op(), Some("read_model_file"));
}

#[test]
fn test_dump_write_distinct_from_io() {
    let dump: LpError = LpCompareError::DumpWrite {
        path: "d.log".to_string(),
        message: "denied".to_string(),
    }
    .into();
    let io: LpError = LpCompareError::Io {
        path: "a.lp".to_string(),
        message: "denied".to_string(),
    }
    .into();

    assert_eq!(dump.kind(), LpErrorKind::DumpWrite);
    assert_eq!(io.kind(), LpErrorKind::Io);
    assert_ne!(dump.code(), io.code());
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (LpErrorKind::InvalidNumber, "ERR_INVALID_NUMBER"),
        (LpErrorKind::NotFound, "ERR_NOT_FOUND"),
        (LpErrorKind::Io, "ERR_IO"),
        (LpErrorKind::DumpWrite, "ERR_DUMP_WRITE"),
        (LpErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected) in kinds {
        assert_eq!(kind.code(), expected);
    }
}

#[test]
fn test_display_format() {
    let err = LpError::new(LpErrorKind::InvalidNumber)
        .with_op("parse_bound")
        .with_path("a.lp")
        .with_line(3)
        .with_token("ten")
        .with_message("Invalid bound value");

    assert_eq!(
        err.to_string(),
        "[ERR_INVALID_NUMBER] in operation 'parse_bound': Invalid bound value (path: a.lp) (line: 3) (token: \"ten\")"
    );
}

#[test]
fn test_serde_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: LpCompareError = json_err.into();
    let lp_err: LpError = err.into();
    assert_eq!(lp_err.kind(), LpErrorKind::Serialization);
}
