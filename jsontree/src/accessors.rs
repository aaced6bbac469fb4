// SPDX-License-Identifier: Apache-2.0

//! Typed getters and setters over a [`Value`].
//!
//! Getters expect the caller to have checked the variant with
//! [`Value::get_type`] first: calling one on the wrong variant, or with an
//! index at or past the size, is a contract violation and panics. The
//! `as_*` probes are the non-panicking alternative.
//!
//! Every setter releases the previous payload before installing the new
//! one, so a value never holds two variants' storage at once.

use alloc::vec::Vec;

use crate::value::{Member, Value, ValueType};

#[cold]
#[track_caller]
fn wrong_type(expected: &str, found: ValueType) -> ! {
    panic!("expected {expected} value, found {found}")
}

#[cold]
#[track_caller]
fn out_of_range(index: usize, size: usize) -> ! {
    panic!("index {index} out of range for size {size}")
}

impl Value {
    /// Reset to Null, releasing any payload.
    pub fn set_null(&mut self) {
        self.deep_free();
    }

    #[track_caller]
    pub fn get_boolean(&self) -> bool {
        match self {
            Value::True => true,
            Value::False => false,
            other => wrong_type("boolean", other.get_type()),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        self.deep_free();
        *self = Value::from(b);
    }

    #[track_caller]
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => wrong_type("number", other.get_type()),
        }
    }

    pub fn set_number(&mut self, n: f64) {
        self.deep_free();
        *self = Value::Number(n);
    }

    /// The string's bytes, exactly as stored.
    #[track_caller]
    pub fn get_string(&self) -> &[u8] {
        match self {
            Value::String(s) => s.as_slice(),
            other => wrong_type("string", other.get_type()),
        }
    }

    #[track_caller]
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// The string as text. Fails only if the bytes are not valid UTF-8, which
    /// can happen for strings set from raw bytes or parsed from byte input.
    #[track_caller]
    pub fn get_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.get_string())
    }

    /// Store a copy of `s`. The empty string is allowed.
    pub fn set_string(&mut self, s: &[u8]) {
        self.deep_free();
        *self = Value::String(s.to_vec());
    }

    /// Replace this value with an empty array with room for `capacity` elements.
    pub fn set_array(&mut self, capacity: usize) {
        self.deep_free();
        *self = Value::Array(Vec::with_capacity(capacity));
    }

    #[track_caller]
    fn array(&self) -> &Vec<Value> {
        match self {
            Value::Array(elements) => elements,
            other => wrong_type("array", other.get_type()),
        }
    }

    #[track_caller]
    fn array_mut(&mut self) -> &mut Vec<Value> {
        match self {
            Value::Array(elements) => elements,
            other => wrong_type("array", other.get_type()),
        }
    }

    #[track_caller]
    pub fn get_array_size(&self) -> usize {
        self.array().len()
    }

    #[track_caller]
    pub fn get_array_capacity(&self) -> usize {
        self.array().capacity()
    }

    #[track_caller]
    pub fn get_array_element(&self, index: usize) -> &Value {
        let elements = self.array();
        match elements.get(index) {
            Some(element) => element,
            None => out_of_range(index, elements.len()),
        }
    }

    #[track_caller]
    pub fn get_array_element_mut(&mut self, index: usize) -> &mut Value {
        let elements = self.array_mut();
        let size = elements.len();
        match elements.get_mut(index) {
            Some(element) => element,
            None => out_of_range(index, size),
        }
    }

    /// Append a Null element and return it for filling in.
    #[track_caller]
    pub fn push_array_element(&mut self) -> &mut Value {
        let elements = self.array_mut();
        elements.push(Value::Null);
        let last = elements.len() - 1;
        &mut elements[last]
    }

    /// Remove and release the last element. The array must not be empty.
    #[track_caller]
    pub fn pop_array_element(&mut self) {
        let elements = self.array_mut();
        if elements.pop().is_none() {
            out_of_range(0, 0);
        }
    }

    /// Release every element, keeping the array's capacity.
    #[track_caller]
    pub fn clear_array(&mut self) {
        self.array_mut().clear();
    }

    /// Replace this value with an empty object with room for `capacity` members.
    pub fn set_object(&mut self, capacity: usize) {
        self.deep_free();
        *self = Value::Object(Vec::with_capacity(capacity));
    }

    #[track_caller]
    fn object(&self) -> &Vec<Member> {
        match self {
            Value::Object(members) => members,
            other => wrong_type("object", other.get_type()),
        }
    }

    #[track_caller]
    fn object_mut(&mut self) -> &mut Vec<Member> {
        match self {
            Value::Object(members) => members,
            other => wrong_type("object", other.get_type()),
        }
    }

    #[track_caller]
    fn member(&self, index: usize) -> &Member {
        let members = self.object();
        match members.get(index) {
            Some(member) => member,
            None => out_of_range(index, members.len()),
        }
    }

    #[track_caller]
    pub fn get_object_size(&self) -> usize {
        self.object().len()
    }

    #[track_caller]
    pub fn get_object_capacity(&self) -> usize {
        self.object().capacity()
    }

    #[track_caller]
    pub fn get_object_key(&self, index: usize) -> &[u8] {
        &self.member(index).key
    }

    #[track_caller]
    pub fn get_object_key_length(&self, index: usize) -> usize {
        self.member(index).key_length()
    }

    #[track_caller]
    pub fn get_object_value(&self, index: usize) -> &Value {
        &self.member(index).value
    }

    #[track_caller]
    pub fn get_object_value_mut(&mut self, index: usize) -> &mut Value {
        let members = self.object_mut();
        let size = members.len();
        match members.get_mut(index) {
            Some(member) => &mut member.value,
            None => out_of_range(index, size),
        }
    }

    /// Append a member with a copy of `key` and a Null value, returning the
    /// value for filling in. An existing member with the same key is kept.
    #[track_caller]
    pub fn push_object_member(&mut self, key: &[u8]) -> &mut Value {
        let members = self.object_mut();
        members.push(Member::new(key, Value::Null));
        let last = members.len() - 1;
        &mut members[last].value
    }

    /// Remove and release the last member. The object must not be empty.
    #[track_caller]
    pub fn pop_object_member(&mut self) {
        if self.object_mut().pop().is_none() {
            out_of_range(0, 0);
        }
    }

    /// Release every member, keeping the object's capacity.
    #[track_caller]
    pub fn clear_object(&mut self) {
        self.object_mut().clear();
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Value::Object(members) => Some(members.as_slice()),
            _ => None,
        }
    }
}
