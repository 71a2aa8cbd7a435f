use std::rc::Rc;

use indexmap::IndexMap;

use super::Value;

/// Own enumerable string-keyed properties, in insertion order
#[derive(Clone, Default)]
pub struct PlainObject {
    properties: IndexMap<Rc<str>, Value>,
}

impl PlainObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced key keeps its enumeration position
    pub fn insert(&mut self, key: impl Into<Rc<str>>, value: Value) -> Option<Value> {
        self.properties.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Keys in enumeration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Value)> {
        self.properties.iter()
    }
}

impl<K: Into<Rc<str>>> FromIterator<(K, Value)> for PlainObject {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut obj = PlainObject::new();
        for (key, value) in iter {
            obj.insert(key, value);
        }
        obj
    }
}
