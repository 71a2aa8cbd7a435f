//! The two identity relations the engine builds on

use crate::value::Value;

/// Strict equality
///
/// Primitives compare by value with IEEE semantics (`NaN` never equals
/// `NaN`, `-0` equals `+0`); composites compare by reference.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => a.ptr_eq(b),
    }
}

/// SameValueZero: strict equality, except that `NaN` equals `NaN`
///
/// This is the key and element identity of ordered maps and unique sets.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_nan() && y.is_nan() => true,
        _ => strict_equals(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_not_strictly_equal() {
        let nan = Value::from(f64::NAN);
        assert!(!strict_equals(&nan, &nan));
        assert!(same_value_zero(&nan, &nan));
    }

    #[test]
    fn test_signed_zero() {
        let pos = Value::from(0.0);
        let neg = Value::from(-0.0);
        assert!(strict_equals(&pos, &neg));
        assert!(same_value_zero(&pos, &neg));
    }

    #[test]
    fn test_no_coercion() {
        assert!(!strict_equals(&Value::from(1), &Value::from("1")));
        assert!(!strict_equals(&Value::Null, &Value::Undefined));
        assert!(!strict_equals(&Value::from(0), &Value::from(false)));
    }

    #[test]
    fn test_composites_by_reference() {
        let arr = Value::array([]);
        assert!(strict_equals(&arr, &arr.clone()));
        assert!(!strict_equals(&arr, &Value::array([])));
    }

    #[test]
    fn test_strings_by_content() {
        let a = Value::from(String::from("abc"));
        let b = Value::from("abc");
        assert!(strict_equals(&a, &b));
    }
}
