//! Per-kind comparators
//!
//! Each comparator assumes both operands already have its kind.

use structeq_core_types::schema::{
    REASON_FLAGS, REASON_LENGTH, REASON_MISSING_ELEMENT, REASON_MISSING_KEY, REASON_SIZE,
    REASON_SOURCE, REASON_TIME,
};
use structeq_core_types::ValueKind;

use super::deep_equal;
use crate::log_mismatch;
use crate::value::{DateValue, MapValue, PlainObject, RegExpValue, SetValue, Value};

/// Same length, then pairwise in ascending index order
pub fn arrays_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        log_mismatch!(ValueKind::Array, REASON_LENGTH);
        return false;
    }
    a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
}

/// Same time value; invalid dates never match
pub fn dates_equal(a: &DateValue, b: &DateValue) -> bool {
    if a.time() != b.time() {
        log_mismatch!(ValueKind::Date, REASON_TIME);
        return false;
    }
    true
}

/// Same source and the same flag string, order included
pub fn regexes_equal(a: &RegExpValue, b: &RegExpValue) -> bool {
    if a.source() != b.source() {
        log_mismatch!(ValueKind::RegExp, REASON_SOURCE);
        return false;
    }
    if a.flags() != b.flags() {
        log_mismatch!(ValueKind::RegExp, REASON_FLAGS);
        return false;
    }
    true
}

/// Same size; every key of `a` present in `b` with a deep-equal value
///
/// Keys are looked up by SameValueZero, never compared structurally.
pub fn maps_equal(a: &MapValue, b: &MapValue) -> bool {
    if a.len() != b.len() {
        log_mismatch!(ValueKind::OrderedMap, REASON_SIZE);
        return false;
    }
    a.iter().all(|(key, value)| match b.get(key.value()) {
        Some(other) => deep_equal(value, other),
        None => {
            log_mismatch!(ValueKind::OrderedMap, REASON_MISSING_KEY);
            false
        }
    })
}

/// Same size; every element of `a` a member of `b`
///
/// Membership is SameValueZero, so structurally equal but distinct
/// composites do not match.
pub fn sets_equal(a: &SetValue, b: &SetValue) -> bool {
    if a.len() != b.len() {
        log_mismatch!(ValueKind::UniqueSet, REASON_SIZE);
        return false;
    }
    a.iter().all(|item| {
        let found = b.contains(item.value());
        if !found {
            log_mismatch!(ValueKind::UniqueSet, REASON_MISSING_ELEMENT);
        }
        found
    })
}

/// Same key count; every key of `a`, in its order, present in `b` with a
/// deep-equal value
pub fn objects_equal(a: &PlainObject, b: &PlainObject) -> bool {
    if a.len() != b.len() {
        log_mismatch!(ValueKind::PlainObject, REASON_LENGTH);
        return false;
    }
    a.iter().all(|(key, value)| match b.get(key) {
        Some(other) => deep_equal(value, other),
        None => {
            log_mismatch!(ValueKind::PlainObject, REASON_MISSING_KEY);
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrays_order_sensitive() {
        let a = [Value::from(1), Value::from(2)];
        let b = [Value::from(2), Value::from(1)];
        assert!(!arrays_equal(&a, &b));
        assert!(arrays_equal(&a, &a.clone()));
    }

    #[test]
    fn test_arrays_length_mismatch() {
        assert!(!arrays_equal(&[Value::Null], &[]));
    }

    #[test]
    fn test_invalid_dates_never_match() {
        let a = DateValue::from_millis(f64::NAN);
        let b = DateValue::from_millis(f64::NAN);
        assert!(!dates_equal(&a, &b));
        assert!(!dates_equal(&a, &a));
    }

    #[test]
    fn test_regex_flag_order_matters() {
        let gi = RegExpValue::new("a", "gi").unwrap();
        let ig = RegExpValue::new("a", "ig").unwrap();
        assert!(!regexes_equal(&gi, &ig));
        assert!(regexes_equal(&gi, &gi.clone()));
    }

    #[test]
    fn test_object_missing_key_with_undefined_value() {
        let a: PlainObject = [("x", Value::Undefined)].into_iter().collect();
        let b: PlainObject = [("y", Value::Undefined)].into_iter().collect();
        assert!(!objects_equal(&a, &b));
        assert!(!objects_equal(&b, &a));
    }

    #[test]
    fn test_object_key_order_irrelevant() {
        let a: PlainObject = [("x", Value::from(1)), ("y", Value::from(2))]
            .into_iter()
            .collect();
        let b: PlainObject = [("y", Value::from(2)), ("x", Value::from(1))]
            .into_iter()
            .collect();
        assert!(objects_equal(&a, &b));
    }

    #[test]
    fn test_map_missing_key() {
        let a: MapValue = [(Value::from(1), Value::Null)].into_iter().collect();
        let b: MapValue = [(Value::from("1"), Value::Null)].into_iter().collect();
        assert!(!maps_equal(&a, &b));
    }

    #[test]
    fn test_sets_with_nan() {
        let a: SetValue = [Value::from(f64::NAN)].into_iter().collect();
        let b: SetValue = [Value::from(f64::NAN)].into_iter().collect();
        assert!(sets_equal(&a, &b));
    }
}
