// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::escape_processor::{
    combine_surrogates, decode_hex4, encode_utf8, is_high_surrogate, is_low_surrogate,
    unescape_simple,
};
use crate::input_buffer::InputBuffer;
use crate::scratch_stack::ScratchStack;
use crate::ParseError;

/// Scan a quoted string at the cursor and return its unescaped bytes.
///
/// Shared by string values and object keys. Content is assembled on the
/// byte stack and popped into an exactly-sized vector at the closing quote.
/// On error everything pushed since the opening quote is discarded, so the
/// stack is back where it started whatever the outcome.
pub fn parse_string_raw(
    input: &mut InputBuffer<'_>,
    stack: &mut ScratchStack<u8>,
) -> Result<Vec<u8>, ParseError> {
    let head = stack.top();
    input.expect(b'"');
    match scan_body(input, stack) {
        Ok(()) => {
            let len = stack.top().saturating_sub(head);
            Ok(stack.pop(len).collect())
        }
        Err(e) => {
            stack.rewind_to(head);
            Err(e)
        }
    }
}

fn scan_body(input: &mut InputBuffer<'_>, stack: &mut ScratchStack<u8>) -> Result<(), ParseError> {
    loop {
        match input.next_byte() {
            b'"' => return Ok(()),
            b'\\' => match input.next_byte() {
                b'u' => {
                    let codepoint = parse_unicode_escape(input)?;
                    let mut utf8_buf = [0u8; 4];
                    let bytes = encode_utf8(codepoint, &mut utf8_buf)?;
                    stack.push(bytes.len()).copy_from_slice(bytes);
                }
                escape_char => stack.push_one(unescape_simple(escape_char)?),
            },
            0 => return Err(ParseError::MissQuotationMark),
            ch if ch < 0x20 => return Err(ParseError::InvalidStringChar),
            ch => stack.push_one(ch),
        }
    }
}

/// Decode the code point of a `\u` escape whose `\u` is already consumed.
///
/// A high surrogate must be followed directly by `\u` and a low surrogate;
/// anything else, including a lone low surrogate, is
/// `InvalidUnicodeSurrogate`.
fn parse_unicode_escape(input: &mut InputBuffer<'_>) -> Result<u32, ParseError> {
    let high = read_hex4(input)?;
    if is_low_surrogate(high) {
        return Err(ParseError::InvalidUnicodeSurrogate);
    }
    if !is_high_surrogate(high) {
        return Ok(high);
    }
    if input.peek() != b'\\' {
        return Err(ParseError::InvalidUnicodeSurrogate);
    }
    input.advance(1);
    if input.peek() != b'u' {
        return Err(ParseError::InvalidUnicodeSurrogate);
    }
    input.advance(1);
    let low = read_hex4(input)?;
    combine_surrogates(high, low)
}

fn read_hex4(input: &mut InputBuffer<'_>) -> Result<u32, ParseError> {
    let unit = decode_hex4(input.peek_slice(4))?;
    input.advance(4);
    Ok(unit)
}
