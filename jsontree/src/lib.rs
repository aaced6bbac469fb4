// SPDX-License-Identifier: Apache-2.0

//! A recursive-descent JSON parser that builds an owned document tree.
//!
//! Parsing fills a caller-supplied [`Value`]. On success the value owns the
//! whole tree; on any error it is left Null and the [`ParseError`] names the
//! grammar rule that failed.
//!
//! ```
//! use jsontree::{parse, Value, ValueType};
//!
//! let mut value = Value::new();
//! parse(&mut value, r#"{"title": "Design", "pages": [1, 2, 3]}"#).unwrap();
//! assert_eq!(value.get_type(), ValueType::Object);
//! assert_eq!(value.get_object_key(0), b"title");
//! assert_eq!(value.get_object_value(1).get_array_size(), 3);
//! assert_eq!(value.stringify(), br#"{"title":"Design","pages":[1,2,3]}"#);
//! ```
//!
//! The crate is `no_std` and needs only `alloc`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod accessors;

mod config;
pub use config::{DefaultConfig, ScratchConfig, ScratchSizes};

mod escape_processor;

mod input_buffer;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser_core;

mod scratch_stack;

mod string_parser;

mod stringify;
pub use stringify::stringify;

mod tree_parser;
pub use tree_parser::TreeParser;

mod value;
pub use value::{Member, Value, ValueType};

/// Parse `json` into `value`, releasing whatever `value` held before.
///
/// On failure `value` is Null.
pub fn parse(value: &mut Value, json: &str) -> Result<(), ParseError> {
    TreeParser::new(json).parse_into(value)
}

/// Like [`parse`], over raw bytes. String content is copied byte for byte.
pub fn parse_slice(value: &mut Value, json: &[u8]) -> Result<(), ParseError> {
    TreeParser::new_from_slice(json).parse_into(value)
}

/// Like [`parse_slice`], with custom initial scratch sizes.
///
/// ```
/// use jsontree::{parse_with_config, ScratchSizes, Value};
///
/// let mut value = Value::new();
/// parse_with_config::<ScratchSizes<16, 4, 4>>(&mut value, b"[\"a\", \"b\"]").unwrap();
/// assert_eq!(value.get_array_element(1).get_string(), b"b");
/// ```
pub fn parse_with_config<C: ScratchConfig>(
    value: &mut Value,
    json: &[u8],
) -> Result<(), ParseError> {
    TreeParser::<C>::with_config_from_slice(json).parse_into(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_points_agree() {
        let json = r#"[null, false, {"k": "v"}]"#;
        let mut a = Value::new();
        let mut b = Value::new();
        let mut c = Value::new();
        parse(&mut a, json).unwrap();
        parse_slice(&mut b, json.as_bytes()).unwrap();
        parse_with_config::<ScratchSizes<1, 1, 1>>(&mut c, json.as_bytes()).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_failure_leaves_null() {
        let mut value = Value::from("previous");
        assert_eq!(parse(&mut value, "[1,"), Err(ParseError::ExpectValue));
        assert!(value.is_null());
    }
}
