// SPDX-License-Identifier: Apache-2.0

use core::marker::PhantomData;

use crate::config::{DefaultConfig, ScratchConfig};
use crate::parser_core::ParserCore;
use crate::value::Value;
use crate::ParseError;

/// A parser that builds a [`Value`] tree from a JSON text held in memory.
///
/// Generic over [`ScratchConfig`] for the initial size of its scratch stacks.
// Lifetime 'a is the input buffer lifetime
pub struct TreeParser<'a, C: ScratchConfig = DefaultConfig> {
    input: &'a [u8],
    /// Cursor position where the last parse stopped
    position: usize,
    _config: PhantomData<C>,
}

impl<'a> TreeParser<'a, DefaultConfig> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use jsontree::{TreeParser, Value};
    /// let mut value = Value::new();
    /// TreeParser::new(r#"{"name": "value"}"#).parse_into(&mut value).unwrap();
    /// assert_eq!(value.get_object_size(), 1);
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// String content is copied byte for byte, so non-UTF-8 input bytes
    /// inside strings end up in the tree unchanged.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_config_from_slice(input)
    }
}

impl<'a, C: ScratchConfig> TreeParser<'a, C> {
    /// Creates a new parser with a custom [`ScratchConfig`].
    ///
    /// # Example
    /// ```
    /// use jsontree::{ScratchSizes, TreeParser};
    /// let parser = TreeParser::<ScratchSizes<4096, 64, 64>>::with_config("[1, 2, 3]");
    /// assert_eq!(parser.parse().unwrap().get_array_size(), 3);
    /// ```
    pub fn with_config(input: &'a str) -> Self {
        Self::with_config_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice with a custom [`ScratchConfig`].
    /// This is the core constructor that all other constructors delegate to.
    pub fn with_config_from_slice(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            _config: PhantomData,
        }
    }

    /// Parse the whole input into `value`.
    ///
    /// `value` is released and reset to Null first. On success it owns the
    /// complete tree; on failure it is left Null and nothing parsed so far
    /// survives.
    pub fn parse_into(&mut self, value: &mut Value) -> Result<(), ParseError> {
        value.deep_free();
        log::debug!("parsing {} bytes of JSON", self.input.len());

        let mut core = ParserCore::new::<C>(self.input);
        let result = core.parse_document();
        self.position = core.position();

        // An unpaired push is an internal bug
        debug_assert!(core.is_unwound(), "scratch stack not unwound after parse");
        if !core.is_unwound() {
            log::error!("scratch stack not unwound after parse");
        }

        match result {
            Ok(root) => {
                *value = root;
                log::debug!("parsed {} bytes into {} value", self.position, value.get_type());
                Ok(())
            }
            Err(e) => {
                log::debug!("parse failed at byte {}: {}", self.position, e);
                Err(e)
            }
        }
    }

    /// Parse the whole input and return the tree.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let mut value = Value::new();
        self.parse_into(&mut value)?;
        Ok(value)
    }

    /// Byte offset where the last parse stopped.
    ///
    /// After an error this is the position of the offending byte, or the
    /// start of the offending token.
    pub fn position(&self) -> usize {
        self.position
    }
}
