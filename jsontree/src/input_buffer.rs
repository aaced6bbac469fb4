// SPDX-License-Identifier: Apache-2.0

use crate::ParseError;

/// Read cursor over the JSON text.
///
/// The end of the slice reads as a `0` byte, as does an embedded NUL, so
/// the grammar sees a terminated text whatever the caller passed in.
#[derive(Debug)]
pub struct InputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> InputBuffer<'a> {
    /// Creates a new InputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Byte at the cursor, or 0 past the end.
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte `offset` positions after the cursor, or 0 past the end.
    pub fn peek_at(&self, offset: usize) -> u8 {
        self.pos
            .checked_add(offset)
            .and_then(|i| self.data.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// True once the cursor sits on the terminator.
    pub fn at_end(&self) -> bool {
        self.peek() == 0
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Read the byte at the cursor and step past it. Never steps past the end.
    pub fn next_byte(&mut self) -> u8 {
        let byte = self.peek();
        if byte != 0 {
            self.pos = self.pos.saturating_add(1);
        }
        byte
    }

    /// Consume `expected`, which the caller has already seen at the cursor.
    pub fn expect(&mut self, expected: u8) {
        debug_assert_eq!(self.peek(), expected);
        self.advance(1);
    }

    /// Skip the four JSON whitespace bytes: space, tab, `\n` and `\r`.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') {
            self.pos = self.pos.saturating_add(1);
        }
    }

    /// Match a keyword literal (`true`, `false`, `null`) at the cursor.
    ///
    /// The cursor only moves when the whole literal matches.
    pub fn match_literal(&mut self, literal: &[u8]) -> Result<(), ParseError> {
        let end = self.pos.saturating_add(literal.len());
        match self.data.get(self.pos..end) {
            Some(found) if found == literal => {
                self.pos = end;
                Ok(())
            }
            _ => Err(ParseError::InvalidValue),
        }
    }

    /// The next `len` bytes at the cursor, without consuming them.
    pub fn peek_slice(&self, len: usize) -> &'a [u8] {
        let end = self.pos.saturating_add(len).min(self.data.len());
        self.data.get(self.pos..end).unwrap_or(&[])
    }
}
