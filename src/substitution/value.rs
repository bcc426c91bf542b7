//! Substitution Values
//!
//! The table a caller hands to the filler.

use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

use crate::error::FillError;

/// Replacement for a single placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SubstitutionValue {
    /// Scalar string, inserted as-is
    Text(String),
    /// Pre-serialized structured literal, inserted as-is
    Literal(String),
    /// Structured value, rendered to an object literal at fill time
    Structured(serde_json::Value),
}

impl SubstitutionValue {
    pub fn text(value: impl Into<String>) -> Self {
        SubstitutionValue::Text(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        SubstitutionValue::Literal(value.into())
    }

    /// Whether the rendered text is a structured literal rather than a scalar
    pub fn is_structured(&self) -> bool {
        !matches!(
            self,
            SubstitutionValue::Text(_) | SubstitutionValue::Structured(serde_json::Value::String(_))
        )
    }
}

impl From<String> for SubstitutionValue {
    fn from(value: String) -> Self {
        SubstitutionValue::Text(value)
    }
}

impl From<&str> for SubstitutionValue {
    fn from(value: &str) -> Self {
        SubstitutionValue::Text(value.to_string())
    }
}

impl From<serde_json::Value> for SubstitutionValue {
    fn from(value: serde_json::Value) -> Self {
        SubstitutionValue::Structured(value)
    }
}

/// Token name to replacement value
///
/// Ordered by name, so anything derived from iteration is deterministic
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionMap {
    entries: BTreeMap<String, SubstitutionValue>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SubstitutionValue>,
    ) -> Option<SubstitutionValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Serialize `value` and insert it as a structured value
    ///
    /// Fails when serde cannot represent `value` as data, e.g. a map keyed
    /// by something other than strings.
    pub fn insert_structured<T: Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Option<SubstitutionValue>, FillError> {
        let name = name.into();
        let data = serde_json::to_value(value)
            .map_err(|e| FillError::malformed(name.clone(), e.to_string()))?;
        Ok(self.insert(name, SubstitutionValue::Structured(data)))
    }

    pub fn get(&self, name: &str) -> Option<&SubstitutionValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<SubstitutionValue> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SubstitutionValue> {
        self.entries.iter()
    }

    /// Merge `other` into `self`; entries of `other` win on conflict
    pub fn merge(&mut self, other: SubstitutionMap) {
        self.entries.extend(other.entries);
    }
}

impl<K, V> FromIterator<(K, V)> for SubstitutionMap
where
    K: Into<String>,
    V: Into<SubstitutionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SubstitutionMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for SubstitutionMap
where
    K: Into<String>,
    V: Into<SubstitutionValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<'a> IntoIterator for &'a SubstitutionMap {
    type Item = (&'a String, &'a SubstitutionValue);
    type IntoIter = btree_map::Iter<'a, String, SubstitutionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
