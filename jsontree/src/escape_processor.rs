// SPDX-License-Identifier: Apache-2.0

//! Decoding of backslash escapes inside JSON strings.
//!
//! These are pure byte/code point functions; the cursor handling lives in
//! `string_parser`.

use core::ops::RangeInclusive;

use crate::ParseError;

const HIGH_SURROGATES: RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Map the byte after a backslash to the byte it stands for.
///
/// `u` is not a simple escape: callers route it to [`decode_hex4`] before
/// getting here, so it is rejected like any other unknown escape.
pub fn unescape_simple(escape: u8) -> Result<u8, ParseError> {
    Ok(match escape {
        b'"' | b'\\' | b'/' => escape,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        _ => return Err(ParseError::InvalidStringEscape),
    })
}

/// Decode the four hex digits of a `\uXXXX` escape into a UTF-16 code unit.
///
/// Fewer than four bytes means the input ended inside the escape.
pub fn decode_hex4(hex: &[u8]) -> Result<u32, ParseError> {
    if hex.len() != 4 {
        return Err(ParseError::InvalidUnicodeHex);
    }
    hex.iter().try_fold(0u32, |unit, &byte| {
        let digit = char::from(byte)
            .to_digit(16)
            .ok_or(ParseError::InvalidUnicodeHex)?;
        Ok((unit << 4) | digit)
    })
}

pub fn is_high_surrogate(unit: u32) -> bool {
    HIGH_SURROGATES.contains(&unit)
}

pub fn is_low_surrogate(unit: u32) -> bool {
    LOW_SURROGATES.contains(&unit)
}

/// Join a UTF-16 surrogate pair into the code point it encodes.
pub fn combine_surrogates(high: u32, low: u32) -> Result<u32, ParseError> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return Err(ParseError::InvalidUnicodeSurrogate);
    }
    Ok(0x10000 + (((high - HIGH_SURROGATES.start()) << 10) | (low - LOW_SURROGATES.start())))
}

/// UTF-8 encode `codepoint` into `buf`, returning the 1 to 4 bytes used.
///
/// Surrogates have no UTF-8 form and are rejected.
pub fn encode_utf8(codepoint: u32, buf: &mut [u8; 4]) -> Result<&[u8], ParseError> {
    let ch = char::from_u32(codepoint).ok_or(ParseError::InvalidUnicodeSurrogate)?;
    Ok(ch.encode_utf8(buf).as_bytes())
}
