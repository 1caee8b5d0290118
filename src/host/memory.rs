//! In-memory simulation host
//!
//! Backs tests and the replay driver. Keys can be published, updated and
//! withdrawn at any time; handles stay stable for the lifetime of the host.

use super::signals::parse_numeric_prefix;
use super::{SignalHandle, SignalHost};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A published signal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    /// Boolean, read as 0 / 1
    Bool(bool),
    /// Integer
    Int(i32),
    /// Float
    Float(f32),
    /// Text (byte-array signals)
    Text(String),
}

impl SignalValue {
    /// Value as float
    #[expect(
        clippy::cast_precision_loss,
        reason = "Integer signals are small mode codes and flags"
    )]
    pub fn as_float(&self) -> f32 {
        match self {
            Self::Bool(b) => f32::from(u8::from(*b)),
            Self::Int(i) => *i as f32,
            Self::Float(f) => *f,
            Self::Text(t) => parse_numeric_prefix(t),
        }
    }

    /// Value as integer, truncating floats
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Truncation mirrors how the host reads a float signal as int"
    )]
    pub fn as_int(&self) -> i32 {
        match self {
            Self::Bool(b) => i32::from(*b),
            Self::Int(i) => *i,
            Self::Float(f) => *f as i32,
            Self::Text(t) => parse_numeric_prefix(t) as i32,
        }
    }

    /// Value as text
    pub fn as_text(&self) -> String {
        match self {
            Self::Bool(b) => i32::from(*b).to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(t) => t.clone(),
        }
    }
}

/// HashMap-backed [`SignalHost`]
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    index: HashMap<String, usize>,
    values: Vec<Option<SignalValue>>,
}

impl MemoryHost {
    /// Create a host that publishes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish or update a signal
    pub fn set(&mut self, key: impl Into<String>, value: SignalValue) {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            self.values[slot] = Some(value);
        } else {
            self.index.insert(key, self.values.len());
            self.values.push(Some(value));
        }
    }

    /// Publish or update several signals at once
    pub fn set_all<K, I>(&mut self, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SignalValue)>,
    {
        for (key, value) in values {
            self.set(key, value);
        }
    }

    /// Withdraw a signal; existing handles read defaults afterwards
    pub fn remove(&mut self, key: &str) {
        if let Some(&slot) = self.index.get(key) {
            self.values[slot] = None;
        }
    }

    /// Withdraw every signal, as when the aircraft is unloaded
    pub fn clear(&mut self) {
        for value in &mut self.values {
            *value = None;
        }
    }

    /// Number of currently published signals
    pub fn published(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    fn value(&self, handle: SignalHandle) -> Option<&SignalValue> {
        self.values.get(handle.0).and_then(Option::as_ref)
    }
}

impl SignalHost for MemoryHost {
    fn find(&self, key: &str) -> Option<SignalHandle> {
        let slot = *self.index.get(key)?;
        self.values[slot].as_ref().map(|_| SignalHandle(slot))
    }

    fn read_float(&self, handle: SignalHandle) -> f32 {
        self.value(handle).map_or(0.0, SignalValue::as_float)
    }

    fn read_int(&self, handle: SignalHandle) -> i32 {
        self.value(handle).map_or(0, SignalValue::as_int)
    }

    fn read_text(&self, handle: SignalHandle) -> String {
        self.value(handle).map(SignalValue::as_text).unwrap_or_default()
    }
}
