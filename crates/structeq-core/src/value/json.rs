//! JSON import
//!
//! Lets fixtures and callers build values from `serde_json` documents.
//! Objects keep document order; every number becomes an `f64`.

use std::rc::Rc;

use serde_json::Value as Json;

use super::Value;
use crate::errors::{Result, StructEqError};
use crate::log_op_error;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            // as_f64 only fails for arbitrary-precision numbers, which are off by default
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(Rc::from(s)),
            Json::Array(items) => Value::array(items.into_iter().map(Value::from)),
            Json::Object(fields) => {
                Value::object(fields.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl Value {
    /// Parse JSON text into a fresh value graph
    ///
    /// # Errors
    ///
    /// * `Serialization` - If the text is not valid JSON
    pub fn from_json_str(text: &str) -> Result<Self> {
        match serde_json::from_str::<Json>(text) {
            Ok(json) => Ok(Value::from(json)),
            Err(e) => {
                let err = StructEqError::from(e);
                log_op_error!("from_json_str", &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use structeq_core_types::ValueKind;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::from(json!(null)).kind(), ValueKind::Null);
        assert_eq!(Value::from(json!(true)), Value::from(true));
        assert_eq!(Value::from(json!(7)), Value::from(7.0));
        assert_eq!(Value::from(json!("s")), Value::from("s"));
    }

    #[test]
    fn test_nested_document() {
        let value = Value::from(json!({"a": [1, {"b": "x"}]}));
        let inner = value.get_property("a").unwrap();
        assert_eq!(inner.kind(), ValueKind::Array);
        assert_eq!(inner.len(), Some(2));
    }

    #[test]
    fn test_each_conversion_is_fresh() {
        let doc = json!({"k": []});
        let a = Value::from(doc.clone());
        let b = Value::from(doc);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        let err = Value::from_json_str("[1,").unwrap_err();
        assert!(matches!(err, StructEqError::Serialization { .. }));
    }
}
