//! Validated property storage shared by all node kinds.

use super::NodeKind;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A property value.
///
/// Covers everything rich-text importers store on nodes: markup toggles,
/// dimensions and scale factors, and urls/ids/tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Markup toggle (bold, italic, ...).
    Bool(bool),
    /// Numeric metadata (dimensions, scale factors, crop margins).
    Int(i64),
    /// Textual metadata (urls, titles, ids, tags).
    Str(String),
}

impl Value {
    /// Get the boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the string value, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

/// The properties mapping of a node, validated against the owning kind's
/// valid-key set.
///
/// Validity, not presence, is what is enforced: reading a valid-but-unset
/// key returns `Ok(None)`, while reading or writing a key outside the kind's
/// set fails with [`Error::InvalidProperty`]. Key order is not meaningful.
///
/// Every node allocates its own mapping at construction; mappings are never
/// shared between nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    kind: NodeKind,
    values: HashMap<String, Value>,
}

impl Properties {
    /// Create an empty mapping validated against `kind`'s key set.
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            values: HashMap::new(),
        }
    }

    /// The node kind this mapping validates against.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Store `value` under `key`, overwriting any prior value.
    ///
    /// Fails with [`Error::InvalidProperty`] if `key` is not in the owning
    /// kind's valid-key set; the mapping is unchanged on failure.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        if !self.kind.allows_key(&key) {
            return Err(Error::invalid_property(self.kind, key));
        }
        self.values.insert(key, value.into());
        Ok(())
    }

    /// Look up the value stored under `key`.
    ///
    /// Returns `Ok(None)` for a valid key with no stored value. Fails with
    /// [`Error::InvalidProperty`] if `key` is outside the kind's valid-key
    /// set, exactly as `set` would.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        if !self.kind.allows_key(key) {
            return Err(Error::invalid_property(self.kind, key));
        }
        Ok(self.values.get(key))
    }

    /// Number of keys with a stored value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no property has been set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored key/value pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
