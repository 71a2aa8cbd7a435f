//! Structural equality engine.
//!
//! Decides whether two values represent the same data, recursively,
//! regardless of reference identity.
//!
//! ## Entry point
//!
//! ```
//! use structeq_core::{deep_equal, Value};
//! use serde_json::json;
//!
//! let a = Value::from(json!({"a": [1, {"b": "x"}]}));
//! let b = Value::from(json!({"a": [1, {"b": "x"}]}));
//! assert!(deep_equal(&a, &b));
//! ```
//!
//! ## Dispatch order
//!
//! 1. strict equality ⇒ equal
//! 2. either side null/undefined ⇒ unequal
//! 3. type families differ ⇒ unequal
//! 4. either side primitive ⇒ strict equality
//! 5. array, date, regex, map, set, plain object, each only when both sides
//!    are that kind
//! 6. anything else ⇒ unequal
//!
//! A new object-like kind must get its own arm ahead of the plain-object arm.
//!
//! ## Limits
//!
//! Recursion depth equals nesting depth. Cyclic graphs are not detected and
//! exhaust the stack.

pub mod comparators;
pub mod identity;

pub use identity::{same_value_zero, strict_equals};

use structeq_core_types::schema::{
    REASON_KIND, REASON_NULLISH, REASON_PRIMITIVE, REASON_TYPE_FAMILY,
};

use crate::log_mismatch;
use crate::value::Value;

/// Recursive structural equality
///
/// Never fails and never mutates either operand.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if strict_equals(a, b) {
        return true;
    }

    let kind = a.kind();
    if a.is_nullish() || b.is_nullish() {
        log_mismatch!(kind, REASON_NULLISH);
        return false;
    }
    if a.type_family() != b.type_family() {
        log_mismatch!(kind, REASON_TYPE_FAMILY);
        return false;
    }
    // Strict equality already failed above
    if a.is_primitive() || b.is_primitive() {
        log_mismatch!(kind, REASON_PRIMITIVE);
        return false;
    }

    match (a, b) {
        (Value::Array(x), Value::Array(y)) => comparators::arrays_equal(&x.borrow(), &y.borrow()),
        (Value::Date(x), Value::Date(y)) => comparators::dates_equal(x, y),
        (Value::RegExp(x), Value::RegExp(y)) => comparators::regexes_equal(x, y),
        (Value::Map(x), Value::Map(y)) => comparators::maps_equal(&x.borrow(), &y.borrow()),
        (Value::Set(x), Value::Set(y)) => comparators::sets_equal(&x.borrow(), &y.borrow()),
        (Value::Object(x), Value::Object(y)) => {
            comparators::objects_equal(&x.borrow(), &y.borrow())
        }
        _ => {
            log_mismatch!(kind, REASON_KIND);
            false
        }
    }
}
