use structeq_core::errors::{ExError, ExErrorKind, StructEqError};
use structeq_core::Value;
use structeq_core_types::ValueKind;

#[test]
fn test_unknown_regex_flag_verifiable_by_kind() {
    let err = Value::regex("a", "gq").unwrap_err();
    assert_eq!(
        err,
        StructEqError::InvalidRegexFlag {
            flags: "gq".to_string(),
            flag: 'q',
        }
    );

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidRegexFlags);
    assert_eq!(ex_err.code(), "ERR_INVALID_REGEX_FLAGS");
    assert_eq!(ex_err.op(), Some("regex"));
}

#[test]
fn test_all_flag_errors_share_kind() {
    for flags in ["x", "mm", "uv"] {
        let err = Value::regex("a", flags).unwrap_err();
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), ExErrorKind::InvalidRegexFlags, "flags {}", flags);
    }
}

#[test]
fn test_every_valid_flag_accepted() {
    for flag in ["d", "g", "i", "m", "s", "u", "v", "y", "dgimsuy"] {
        assert!(Value::regex("a", flag).is_ok(), "flags {}", flag);
    }
}

#[test]
fn test_invalid_date_structured_fields() {
    let err = Value::parse_date("2024-13-45").unwrap_err();
    assert!(matches!(err, StructEqError::InvalidDate { ref input, .. } if input == "2024-13-45"));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDate);
    assert!(ex_err.message().contains("Invalid date"));
}

#[test]
fn test_kind_mismatch_carries_op() {
    let err = Value::map([]).set_property("k", Value::Null).unwrap_err();
    assert_eq!(
        err,
        StructEqError::KindMismatch {
            op: "set_property".to_string(),
            expected: ValueKind::PlainObject,
            found: ValueKind::OrderedMap,
        }
    );
    assert_eq!(
        err.to_string(),
        "Operation 'set_property' expects plain-object, found ordered-map"
    );

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_KIND_MISMATCH");
    assert_eq!(ex_err.op(), Some("set_property"));
}

#[test]
fn test_serialization_error() {
    let err = Value::from_json_str("{\"a\":").unwrap_err();
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert!(ex_err.to_string().starts_with("[ERR_SERIALIZATION]"));
}

#[test]
fn test_error_kind_codes_unique() {
    let kinds = [
        ExErrorKind::InvalidRegexFlags,
        ExErrorKind::InvalidDate,
        ExErrorKind::KindMismatch,
        ExErrorKind::Serialization,
    ];
    let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}
