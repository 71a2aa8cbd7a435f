//! Kind taxonomy for runtime values
//!
//! Every value is classified into exactly one [`ValueKind`] before it is
//! compared. Kinds are grouped into coarser [`TypeFamily`] buckets that mirror
//! a `typeof`-style inspection: all composites and `null` share the `Object`
//! family.

use serde::{Deserialize, Serialize};

/// Closed set of kinds a value can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    PlainObject,
    Date,
    RegExp,
    OrderedMap,
    UniqueSet,
}

impl ValueKind {
    /// All kinds, in classification order
    pub const ALL: [ValueKind; 11] = [
        ValueKind::Undefined,
        ValueKind::Null,
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::String,
        ValueKind::Array,
        ValueKind::PlainObject,
        ValueKind::Date,
        ValueKind::RegExp,
        ValueKind::OrderedMap,
        ValueKind::UniqueSet,
    ];

    /// Stable lowercase name, used in log fields and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::PlainObject => "plain-object",
            ValueKind::Date => "date",
            ValueKind::RegExp => "reg-exp",
            ValueKind::OrderedMap => "ordered-map",
            ValueKind::UniqueSet => "unique-set",
        }
    }

    /// The `typeof`-style family this kind belongs to
    pub fn family(&self) -> TypeFamily {
        match self {
            ValueKind::Undefined => TypeFamily::Undefined,
            ValueKind::Boolean => TypeFamily::Boolean,
            ValueKind::Number => TypeFamily::Number,
            ValueKind::String => TypeFamily::String,
            ValueKind::Null
            | ValueKind::Array
            | ValueKind::PlainObject
            | ValueKind::Date
            | ValueKind::RegExp
            | ValueKind::OrderedMap
            | ValueKind::UniqueSet => TypeFamily::Object,
        }
    }

    /// Null or undefined
    pub fn is_nullish(&self) -> bool {
        matches!(self, ValueKind::Undefined | ValueKind::Null)
    }

    /// Kinds compared by strict equality alone
    ///
    /// `null` counts as primitive here even though its family is `Object`.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            ValueKind::Undefined
                | ValueKind::Null
                | ValueKind::Boolean
                | ValueKind::Number
                | ValueKind::String
        )
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse runtime type category used by the kind-family guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFamily {
    Undefined,
    Boolean,
    Number,
    String,
    Object,
}

impl TypeFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFamily::Undefined => "undefined",
            TypeFamily::Boolean => "boolean",
            TypeFamily::Number => "number",
            TypeFamily::String => "string",
            TypeFamily::Object => "object",
        }
    }
}

impl std::fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
