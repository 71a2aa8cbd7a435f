//! Ordered map and unique set containers
//!
//! Both containers identify keys/elements by SameValueZero: primitives by
//! value (with every `NaN` matching every other `NaN`, and `-0` matching
//! `+0`), composites by reference. Membership is never structural.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::{IndexMap, IndexSet};

use super::Value;
use crate::engine::same_value_zero;

/// A value used as a map key or set element
#[derive(Clone)]
pub struct MapKey(Value);

impl MapKey {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        same_value_zero(&self.0, &other.0)
    }
}

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.kind().hash(state);
        match &self.0 {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => {
                let bits = if n.is_nan() {
                    f64::NAN.to_bits()
                } else if *n == 0.0 {
                    0
                } else {
                    n.to_bits()
                };
                bits.hash(state);
            }
            Value::String(s) => s.hash(state),
            composite => composite.identity().hash(state),
        }
    }
}

impl fmt::Debug for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Value> for MapKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Insertion-ordered key-value map
#[derive(Clone, Default)]
pub struct MapValue {
    entries: IndexMap<MapKey, Value>,
}

impl MapValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced key keeps its position
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.entries.insert(MapKey(key), value)
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(&MapKey(key.clone()))
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(&MapKey(key.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &Value)> {
        self.entries.iter()
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = MapValue::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Insertion-ordered set of unique elements
#[derive(Clone, Default)]
pub struct SetValue {
    items: IndexSet<MapKey>,
}

impl SetValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the element was already present
    pub fn insert(&mut self, item: Value) -> bool {
        self.items.insert(MapKey(item))
    }

    pub fn contains(&self, item: &Value) -> bool {
        self.items.contains(&MapKey(item.clone()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapKey> {
        self.items.iter()
    }
}

impl FromIterator<Value> for SetValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = SetValue::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}
