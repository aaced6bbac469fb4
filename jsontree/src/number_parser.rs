// SPDX-License-Identifier: Apache-2.0

use crate::input_buffer::InputBuffer;
use crate::ParseError;

/// Scan a number token at the cursor and convert it to a double.
///
/// The token must match `-?(0|[1-9]\d*)(\.\d+)?([eE][+-]?\d+)?`. Scanning
/// stops at the first byte that cannot extend the token, so `0123` yields
/// `0` and leaves `123` for the caller to reject. The cursor only moves on
/// success.
pub fn parse_number(input: &mut InputBuffer<'_>) -> Result<f64, ParseError> {
    let len = scan_number(input)?;
    let n = convert(input.peek_slice(len))?;
    input.advance(len);
    Ok(n)
}

/// Validate the number grammar and return the token length in bytes.
pub fn scan_number(input: &InputBuffer<'_>) -> Result<usize, ParseError> {
    let mut p = 0usize;
    if input.peek_at(p) == b'-' {
        p += 1;
    }
    match input.peek_at(p) {
        b'0' => p += 1,
        b'1'..=b'9' => {
            p += 1;
            while input.peek_at(p).is_ascii_digit() {
                p += 1;
            }
        }
        _ => return Err(ParseError::InvalidValue),
    }
    if input.peek_at(p) == b'.' {
        p += 1;
        if !input.peek_at(p).is_ascii_digit() {
            return Err(ParseError::InvalidValue);
        }
        while input.peek_at(p).is_ascii_digit() {
            p += 1;
        }
    }
    if matches!(input.peek_at(p), b'e' | b'E') {
        p += 1;
        if matches!(input.peek_at(p), b'+' | b'-') {
            p += 1;
        }
        if !input.peek_at(p).is_ascii_digit() {
            return Err(ParseError::InvalidValue);
        }
        while input.peek_at(p).is_ascii_digit() {
            p += 1;
        }
    }
    Ok(p)
}

/// Convert an already validated token. Underflow is a valid zero; an
/// infinite result is `NumberTooBig`.
pub fn convert(token: &[u8]) -> Result<f64, ParseError> {
    let text = core::str::from_utf8(token).map_err(|_| ParseError::InvalidValue)?;
    let n: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> Result<(f64, usize), ParseError> {
        let mut input = InputBuffer::new(text.as_bytes());
        let n = parse_number(&mut input)?;
        Ok((n, input.current_pos()))
    }

    #[test]
    fn test_valid_tokens() {
        assert_eq!(number("0"), Ok((0.0, 1)));
        assert_eq!(number("-0.0"), Ok((0.0, 4)));
        assert_eq!(number("1.5]"), Ok((1.5, 3)));
        assert_eq!(number("-1E-10,"), Ok((-1e-10, 6)));
        assert_eq!(number("1.234E+10"), Ok((1.234e10, 9)));
    }

    #[test]
    fn test_leading_zero_stops_token() {
        assert_eq!(number("0123"), Ok((0.0, 1)));
        assert_eq!(number("0x0"), Ok((0.0, 1)));
    }

    #[test]
    fn test_invalid_tokens_do_not_move_cursor() {
        for bad in ["+0", "+1", ".123", "1.", "1e", "1e+", "-", "INF", "inf", "NAN", "nan"] {
            let mut input = InputBuffer::new(bad.as_bytes());
            assert_eq!(
                parse_number(&mut input),
                Err(ParseError::InvalidValue),
                "token {bad:?}"
            );
            assert_eq!(input.current_pos(), 0);
        }
    }

    #[test]
    fn test_overflow_and_underflow() {
        assert_eq!(number("1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(number("-1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(number("1e-10000"), Ok((0.0, 8)));
    }
}
