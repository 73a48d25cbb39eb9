//! Key-value context fields
//!
//! This module provides:
//! - `FieldValue`: a renderable scalar
//! - `FieldSet`: an ordered, key-unique, immutable collection of fields
//!
//! A `FieldSet` is never changed after it is built. Every operation that adds
//! fields returns a new set, so a parent logger's fields can be shared with
//! any number of derived loggers without locking.

use super::palette::Palette;
use colored::Color;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Value type for context fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Text written after `key=`; strings that would break the
    /// `key=value` layout are quoted
    pub fn render(&self) -> String {
        match self {
            FieldValue::String(s) if needs_quoting(s) => {
                format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            other => other.to_string(),
        }
    }
}

fn needs_quoting(value: &str) -> bool {
    value.contains(' ') || value.contains('"') || value.contains('=')
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

/// Ordered collection of fields with unique keys
///
/// When a key appears twice the later value wins and the key keeps the
/// position where it was first seen.
///
/// # Example
///
/// ```
/// use rust_console_logger::FieldSet;
///
/// let global = FieldSet::from([("app", "myapp"), ("env", "dev")]);
/// let merged = global.merge(&FieldSet::from([("env", "prod")]));
///
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["app", "env"]);
/// assert_eq!(merged.get("env").unwrap().to_string(), "prod");
/// assert_eq!(global.get("env").unwrap().to_string(), "dev");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    fields: Arc<[Field]>,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(fields: Vec<Field>) -> Self {
        Self {
            fields: fields.into(),
        }
    }

    /// Return a new set with one more field
    #[must_use]
    pub fn with<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut fields = self.fields.to_vec();
        upsert(
            &mut fields,
            Field {
                key: key.into(),
                value: value.into(),
            },
        );
        Self::from_vec(fields)
    }

    /// Concatenate `self` then `other` and collapse duplicate keys
    #[must_use]
    pub fn merge(&self, other: &FieldSet) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut fields = self.fields.to_vec();
        for field in other.iter() {
            upsert(&mut fields, field.clone());
        }
        Self::from_vec(fields)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Format fields as `key=value` pairs, keys painted in `color`
    pub fn render(&self, color: Color, palette: &dyn Palette) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}={}", palette.paint(&f.key, color), f.value.render()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn upsert(fields: &mut Vec<Field>, field: Field) {
    match fields.iter_mut().find(|f| f.key == field.key) {
        Some(existing) => existing.value = field.value,
        None => fields.push(field),
    }
}

/// Free-standing form of [`FieldSet::merge`]
pub fn merge(a: &FieldSet, b: &FieldSet) -> FieldSet {
    a.merge(b)
}

impl<K, V> FromIterator<(K, V)> for FieldSet
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Vec::new();
        for (key, value) in iter {
            upsert(
                &mut fields,
                Field {
                    key: key.into(),
                    value: value.into(),
                },
            );
        }
        Self::from_vec(fields)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FieldSet
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self
            .fields
            .iter()
            .map(|field| format!("{}={}", field.key, field.value.render()))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", plain)
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for field in self.iter() {
            map.serialize_entry(&field.key, &field.value)?;
        }
        map.end()
    }
}

struct FieldSetVisitor;

impl<'de> Visitor<'de> for FieldSetVisitor {
    type Value = FieldSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldSet, A::Error> {
        let mut fields = Vec::new();
        while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
            upsert(&mut fields, Field { key, value });
        }
        Ok(FieldSet::from_vec(fields))
    }
}

// Document order is kept, unlike a HashMap round trip.
impl<'de> Deserialize<'de> for FieldSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FieldSetVisitor)
    }
}
