// SPDX-License-Identifier: Apache-2.0

//! The document tree.
//!
//! A [`Value`] owns its whole subtree: strings own their bytes, arrays own
//! their elements and objects own their members. There is no sharing and no
//! back-reference, so releasing a node releases everything below it.

use alloc::vec::Vec;

/// The kind of a [`Value`], as returned by [`Value::get_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::False => "false",
            ValueType::True => "true",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed JSON node.
///
/// Exactly one variant is live at a time. The `set_*` mutators
/// release the previous payload before installing a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    /// Every JSON number is held as a double.
    Number(f64),
    /// Length-tagged string bytes, normally valid UTF-8.
    String(Vec<u8>),
    Array(Vec<Value>),
    /// Members in insertion order. Duplicate keys are kept as-is.
    Object(Vec<Member>),
}

/// A key/value pair inside an object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Member {
    pub key: Vec<u8>,
    pub value: Value,
}

impl Member {
    pub fn new(key: impl Into<Vec<u8>>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key_length(&self) -> usize {
        self.key.len()
    }
}

impl Value {
    /// Creates a Null value.
    pub const fn new() -> Self {
        Value::Null
    }

    /// Releases everything this value owns and resets it to Null.
    ///
    /// Strings drop their bytes; arrays and objects release every element,
    /// member key and member value before their own storage. Calling this on
    /// a Null value does nothing, so repeated calls are harmless.
    pub fn deep_free(&mut self) {
        if self.is_null() {
            return;
        }
        let old = core::mem::take(self);
        drop(old);
    }

    /// Moves the tree out, leaving Null behind.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Exchanges the contents of two values without copying subtrees.
    pub fn swap(&mut self, other: &mut Value) {
        core::mem::swap(self, other);
    }

    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::False | Value::True)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<Vec<Member>> for Value {
    fn from(members: Vec<Member>) -> Self {
        Value::Object(members)
    }
}
