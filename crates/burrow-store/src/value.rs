//! The stored value model.
//!
//! Callers hand the store whatever shape their content takes: raw binary,
//! a list of integers, or plain text. The store holds the value as-is and
//! returns it unchanged: no truncation, no encoding transformation.
//! Layers that require binary data use [`Value::into_byte_array`] to decide
//! whether a stored value is byte-interpretable.

use serde::{Deserialize, Serialize};

/// An opaque namespace handle inside the blob store.
///
/// Each directory writes its plain file content under its own `StoreId`;
/// packed bitfields share a single reserved `StoreId`. Two entries collide
/// only if both the store id and the key match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(String);

impl StoreId {
    /// Create a store id from a caller-controlled name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The underlying namespace name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value held by the blob store.
///
/// `Bytes` round-trips exactly. `Numbers` exists for callers that hand over
/// byte values as a plain integer list; it is byte-interpretable only when
/// every element fits in `0..=255`. `Text` is never byte-interpretable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Raw binary buffer.
    Bytes(Vec<u8>),
    /// Array-like sequence of integers.
    Numbers(Vec<i64>),
    /// Plain text.
    Text(String),
}

impl Value {
    /// Short label for the value's shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "bytes",
            Value::Numbers(_) => "numbers",
            Value::Text(_) => "text",
        }
    }

    /// Interpret the value as a byte array, if its shape allows it.
    ///
    /// Returns `None` for text and for integer lists containing any element
    /// outside `0..=255`.
    pub fn into_byte_array(self) -> Option<Vec<u8>> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            Value::Numbers(numbers) => numbers
                .into_iter()
                .map(|n| u8::try_from(n).ok())
                .collect(),
            Value::Text(_) => None,
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}
