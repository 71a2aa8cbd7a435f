//! Runtime value model
//!
//! [`Value`] is the closed set of kinds the equality engine understands.
//! Primitives are held by value. Composites are `Rc` handles, so cloning a
//! `Value` yields a reference-identical alias rather than a copy, and
//! mutating through one alias is visible through every other.

pub mod collections;
pub mod date;
pub mod json;
pub mod object;
pub mod regex;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use structeq_core_types::{TypeFamily, ValueKind};

use crate::errors::{Result, StructEqError};
use crate::log_op_error;

pub use collections::{MapKey, MapValue, SetValue};
pub use date::DateValue;
pub use object::PlainObject;
pub use regex::RegExpValue;

/// A comparable runtime value
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Array(Rc<RefCell<Vec<Value>>>),
    Object(Rc<RefCell<PlainObject>>),
    Date(Rc<DateValue>),
    RegExp(Rc<RegExpValue>),
    Map(Rc<RefCell<MapValue>>),
    Set(Rc<RefCell<SetValue>>),
}

impl Value {
    // ===== Classification =====

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::PlainObject,
            Value::Date(_) => ValueKind::Date,
            Value::RegExp(_) => ValueKind::RegExp,
            Value::Map(_) => ValueKind::OrderedMap,
            Value::Set(_) => ValueKind::UniqueSet,
        }
    }

    pub fn type_family(&self) -> TypeFamily {
        self.kind().family()
    }

    pub fn is_nullish(&self) -> bool {
        self.kind().is_nullish()
    }

    pub fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    /// Reference identity of two composite handles
    ///
    /// Always false for primitives, which have no identity of their own.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Address of the composite allocation, if any
    pub(crate) fn identity(&self) -> Option<usize> {
        let ptr = match self {
            Value::Array(rc) => Rc::as_ptr(rc) as *const (),
            Value::Object(rc) => Rc::as_ptr(rc) as *const (),
            Value::Date(rc) => Rc::as_ptr(rc) as *const (),
            Value::RegExp(rc) => Rc::as_ptr(rc) as *const (),
            Value::Map(rc) => Rc::as_ptr(rc) as *const (),
            Value::Set(rc) => Rc::as_ptr(rc) as *const (),
            _ => return None,
        };
        Some(ptr as usize)
    }

    // ===== Construction =====

    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Plain object; later duplicates overwrite earlier ones in place
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<Rc<str>>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    /// Ordered map keyed by SameValueZero
    pub fn map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        Value::Map(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    /// Unique set with SameValueZero membership
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Set(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    pub fn date_from_millis(millis: f64) -> Self {
        Value::Date(Rc::new(DateValue::from_millis(millis)))
    }

    /// Parse an RFC 3339 timestamp
    ///
    /// # Errors
    ///
    /// * `InvalidDate` - If the text is not a valid RFC 3339 timestamp
    pub fn parse_date(input: &str) -> Result<Self> {
        match DateValue::parse_rfc3339(input) {
            Ok(date) => Ok(Value::Date(Rc::new(date))),
            Err(err) => {
                log_op_error!("parse_date", &err);
                Err(err)
            }
        }
    }

    /// Regular expression from pattern source and flag string
    ///
    /// # Errors
    ///
    /// * `InvalidRegexFlag` - If a flag is outside `dgimsuvy`
    /// * `DuplicateRegexFlag` - If a flag repeats
    /// * `ConflictingRegexFlags` - If both `u` and `v` are given
    pub fn regex(source: impl Into<Rc<str>>, flags: &str) -> Result<Self> {
        match RegExpValue::new(source, flags) {
            Ok(re) => Ok(Value::RegExp(Rc::new(re))),
            Err(err) => {
                log_op_error!("regex", &err);
                Err(err)
            }
        }
    }

    // ===== Inspection =====

    /// Element, key or entry count of a composite
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.borrow().len()),
            Value::Object(obj) => Some(obj.borrow().len()),
            Value::Map(map) => Some(map.borrow().len()),
            Value::Set(set) => Some(set.borrow().len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Own property of a plain object
    pub fn get_property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().get(key).cloned(),
            _ => None,
        }
    }

    /// Value stored under a map key
    pub fn map_get(&self, key: &Value) -> Option<Value> {
        match self {
            Value::Map(map) => map.borrow().get(key).cloned(),
            _ => None,
        }
    }

    /// The instant of a valid date
    ///
    /// `None` for non-dates, invalid dates, and valid dates outside chrono's
    /// representable range (see [`DateValue::to_date_time`]).
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(date) => date.to_date_time(),
            _ => None,
        }
    }

    // ===== Mutation =====

    /// Append to an array
    ///
    /// # Errors
    ///
    /// * `KindMismatch` - If `self` is not an array
    pub fn push(&self, item: Value) -> Result<()> {
        match self {
            Value::Array(items) => {
                items.borrow_mut().push(item);
                Ok(())
            }
            other => Err(kind_mismatch("push", ValueKind::Array, other)),
        }
    }

    /// Insert or replace an own property
    ///
    /// # Errors
    ///
    /// * `KindMismatch` - If `self` is not a plain object
    pub fn set_property(&self, key: impl Into<Rc<str>>, value: Value) -> Result<()> {
        match self {
            Value::Object(obj) => {
                obj.borrow_mut().insert(key, value);
                Ok(())
            }
            other => Err(kind_mismatch("set_property", ValueKind::PlainObject, other)),
        }
    }

    /// Insert or replace a map entry, keeping the key's original position
    ///
    /// # Errors
    ///
    /// * `KindMismatch` - If `self` is not an ordered map
    pub fn map_insert(&self, key: Value, value: Value) -> Result<()> {
        match self {
            Value::Map(map) => {
                map.borrow_mut().insert(key, value);
                Ok(())
            }
            other => Err(kind_mismatch("map_insert", ValueKind::OrderedMap, other)),
        }
    }

    /// Add a set element; returns false if it was already a member
    ///
    /// # Errors
    ///
    /// * `KindMismatch` - If `self` is not a unique set
    pub fn set_add(&self, item: Value) -> Result<bool> {
        match self {
            Value::Set(set) => Ok(set.borrow_mut().insert(item)),
            other => Err(kind_mismatch("set_add", ValueKind::UniqueSet, other)),
        }
    }

    /// Move a date to another instant
    ///
    /// # Errors
    ///
    /// * `KindMismatch` - If `self` is not a date
    pub fn set_time(&self, millis: f64) -> Result<()> {
        match self {
            Value::Date(date) => {
                date.set_time(millis);
                Ok(())
            }
            other => Err(kind_mismatch("set_time", ValueKind::Date, other)),
        }
    }
}

fn kind_mismatch(op: &str, expected: ValueKind, found: &Value) -> StructEqError {
    let err = StructEqError::KindMismatch {
        op: op.to_string(),
        expected,
        found: found.kind(),
    };
    log_op_error!(op, &err);
    err
}

// ===== Conversions =====

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Date(Rc::new(DateValue::from(instant)))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Structural equality; `NaN` is unequal to itself, as with `f64`
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::engine::deep_equal(self, other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => f.debug_list().entries(items.borrow().iter()).finish(),
            Value::Object(obj) => f.debug_map().entries(obj.borrow().iter()).finish(),
            Value::Date(date) => write!(f, "{:?}", date),
            Value::RegExp(re) => write!(f, "{}", re),
            Value::Map(map) => {
                write!(f, "Map ")?;
                f.debug_map().entries(map.borrow().iter()).finish()
            }
            Value::Set(set) => {
                write!(f, "Set ")?;
                f.debug_set().entries(set.borrow().iter()).finish()
            }
        }
    }
}
