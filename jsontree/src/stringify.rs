// SPDX-License-Identifier: Apache-2.0

//! Compact JSON rendering of a [`Value`] tree.
//!
//! Output has no insignificant whitespace. Strings and keys escape `"`, `\`
//! and control bytes; every other byte, including UTF-8 sequences and `/`,
//! is written verbatim. Numbers use the shortest text that parses back to
//! the same double. NaN and infinities have no JSON form and render as
//! `null`.

use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::value::{Member, Value};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Magnitudes in `[PLAIN_MIN, PLAIN_MAX)` print in plain decimal notation.
const PLAIN_MIN: f64 = 1e-5;
const PLAIN_MAX: f64 = 1e17;

/// Render `value` as JSON text.
///
/// Bytes are returned rather than `String` because string values may hold
/// arbitrary bytes.
pub fn stringify(value: &Value) -> Vec<u8> {
    let mut out = ByteSink(Vec::new());
    write_value(&mut out, value).ok();
    out.0
}

/// `fmt::Write` over the output bytes, so numbers format in place.
struct ByteSink(Vec<u8>);

impl Write for ByteSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

fn write_value(out: &mut ByteSink, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::False => out.write_str("false"),
        Value::True => out.write_str("true"),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => {
            write_string(&mut out.0, s);
            Ok(())
        }
        Value::Array(elements) => {
            out.write_char('[')?;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_value(out, element)?;
            }
            out.write_char(']')
        }
        Value::Object(members) => {
            out.write_char('{')?;
            for (i, Member { key, value }) in members.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_string(&mut out.0, key);
                out.write_char(':')?;
                write_value(out, value)?;
            }
            out.write_char('}')
        }
    }
}

fn write_number(out: &mut ByteSink, n: f64) -> fmt::Result {
    if !n.is_finite() {
        return out.write_str("null");
    }
    let magnitude = if n < 0.0 { -n } else { n };
    if n == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        write!(out, "{n}")
    } else {
        write!(out, "{n:e}")
    }
}

fn write_string(out: &mut Vec<u8>, s: &[u8]) {
    out.push(b'"');
    for &byte in s {
        match byte {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            ctrl if ctrl < 0x20 => {
                out.extend_from_slice(b"\\u00");
                out.push(HEX_DIGITS[(ctrl >> 4) as usize]);
                out.push(HEX_DIGITS[(ctrl & 0xF) as usize]);
            }
            other => out.push(other),
        }
    }
    out.push(b'"');
}

impl Value {
    /// Render this value as JSON text. See [`stringify`].
    pub fn stringify(&self) -> Vec<u8> {
        stringify(self)
    }
}

impl fmt::Display for Value {
    /// Same text as [`stringify`], with any invalid UTF-8 replaced by U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = stringify(self);
        for chunk in bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}
