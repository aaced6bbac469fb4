// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent grammar engine.
//!
//! `ParserCore` drives the scanners over one input text and assembles the
//! tree. Composite values are built on LIFO scratch stacks: each array
//! pushes its element snapshots, each object its member snapshots, and both
//! pop exactly what they pushed, either into the finished container on
//! success or discarded on failure. Nested calls therefore leave the stacks
//! exactly as they found them, whatever the outcome.

use alloc::vec::Vec;

use crate::config::ScratchConfig;
use crate::input_buffer::InputBuffer;
use crate::number_parser::parse_number;
use crate::scratch_stack::ScratchStack;
use crate::string_parser::parse_string_raw;
use crate::value::{Member, Value};
use crate::ParseError;

/// The grammar engine and the scratch state of a single parse.
pub struct ParserCore<'a> {
    /// Read cursor over the JSON text
    input: InputBuffer<'a>,
    /// String and key content under construction
    bytes: ScratchStack<u8>,
    /// Array element snapshots of every open array
    values: ScratchStack<Value>,
    /// Object member snapshots of every open object
    members: ScratchStack<Member>,
}

impl<'a> ParserCore<'a> {
    pub fn new<C: ScratchConfig>(json: &'a [u8]) -> Self {
        Self {
            input: InputBuffer::new(json),
            bytes: ScratchStack::new(C::BYTE_STACK_INIT),
            values: ScratchStack::new(C::VALUE_STACK_INIT),
            members: ScratchStack::new(C::MEMBER_STACK_INIT),
        }
    }

    /// Byte offset of the cursor. After a failure this is where scanning stopped.
    pub fn position(&self) -> usize {
        self.input.current_pos()
    }

    /// True when no scratch data is outstanding.
    pub fn is_unwound(&self) -> bool {
        self.bytes.is_empty() && self.values.is_empty() && self.members.is_empty()
    }

    /// Parse exactly one value surrounded by optional whitespace.
    pub fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.input.skip_whitespace();
        let root = self.parse_value()?;
        self.input.skip_whitespace();
        if !self.input.at_end() {
            // `root` is released on the way out
            return Err(ParseError::RootNotSingular);
        }
        Ok(root)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.input.peek() {
            b't' => self.parse_literal(b"true", Value::True),
            b'f' => self.parse_literal(b"false", Value::False),
            b'n' => self.parse_literal(b"null", Value::Null),
            b'"' => parse_string_raw(&mut self.input, &mut self.bytes).map(Value::String),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            0 => Err(ParseError::ExpectValue),
            _ => parse_number(&mut self.input).map(Value::Number),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        self.input.match_literal(literal)?;
        Ok(value)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.input.expect(b'[');
        self.input.skip_whitespace();
        if self.input.peek() == b']' {
            self.input.advance(1);
            return Ok(Value::Array(Vec::new()));
        }

        let mark = self.values.top();
        let mut size = 0usize;
        match self.parse_elements(&mut size) {
            Ok(()) => {
                let elements: Vec<Value> = self.values.pop(size).collect();
                log::trace!("array finalized with {} elements", size);
                Ok(Value::Array(elements))
            }
            Err(e) => {
                // Releases every element snapshot and its subtree
                self.values.rewind_to(mark);
                Err(e)
            }
        }
    }

    fn parse_elements(&mut self, size: &mut usize) -> Result<(), ParseError> {
        loop {
            let element = self.parse_value()?;
            self.values.push_one(element);
            *size += 1;
            self.input.skip_whitespace();
            match self.input.peek() {
                b',' => {
                    self.input.advance(1);
                    self.input.skip_whitespace();
                }
                b']' => {
                    self.input.advance(1);
                    return Ok(());
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.input.expect(b'{');
        self.input.skip_whitespace();
        if self.input.peek() == b'}' {
            self.input.advance(1);
            return Ok(Value::Object(Vec::new()));
        }

        let mark = self.members.top();
        let mut size = 0usize;
        match self.parse_members(&mut size) {
            Ok(()) => {
                let members: Vec<Member> = self.members.pop(size).collect();
                log::trace!("object finalized with {} members", size);
                Ok(Value::Object(members))
            }
            Err(e) => {
                self.members.rewind_to(mark);
                Err(e)
            }
        }
    }

    fn parse_members(&mut self, size: &mut usize) -> Result<(), ParseError> {
        loop {
            // Decided on the lookahead, so a malformed key still reports its own error
            if self.input.peek() != b'"' {
                return Err(ParseError::MissKey);
            }
            let key = parse_string_raw(&mut self.input, &mut self.bytes)?;
            self.input.skip_whitespace();
            if self.input.peek() != b':' {
                return Err(ParseError::MissColon);
            }
            self.input.advance(1);
            self.input.skip_whitespace();
            let value = self.parse_value()?;
            self.members.push_one(Member { key, value });
            *size += 1;
            self.input.skip_whitespace();
            match self.input.peek() {
                b',' => {
                    self.input.advance(1);
                    self.input.skip_whitespace();
                }
                b'}' => {
                    self.input.advance(1);
                    return Ok(());
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}
