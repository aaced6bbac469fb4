// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// Exactly one of these is reported per failed parse. A successful parse is
/// `Ok(())`, so there is no "OK" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended (or was only whitespace) where a value was required.
    ExpectValue,
    /// An unrecognized literal or a malformed number token.
    InvalidValue,
    /// A valid root value was followed by more non-whitespace content.
    RootNotSingular,
    /// A number token converts to an infinite magnitude.
    NumberTooBig,
    /// The input ended inside a string.
    MissQuotationMark,
    /// A backslash was followed by a character that is not a valid escape.
    InvalidStringEscape,
    /// An unescaped control character (below 0x20) inside a string.
    InvalidStringChar,
    /// Invalid hex digits in a `\uXXXX` escape.
    InvalidUnicodeHex,
    /// An unpaired or mismatched UTF-16 surrogate in a `\uXXXX` escape.
    InvalidUnicodeSurrogate,
    /// An array element was followed by something other than `,` or `]`.
    MissCommaOrSquareBracket,
    /// An object member did not start with a quoted key.
    MissKey,
    /// An object key was not followed by `:`.
    MissColon,
    /// An object member was followed by something other than `,` or `}`.
    MissCommaOrCurlyBracket,
}

impl ParseError {
    /// Short, stable description of the error.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "root is not singular",
            ParseError::NumberTooBig => "number too big",
            ParseError::MissQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
            ParseError::InvalidUnicodeHex => "invalid unicode hex digits",
            ParseError::InvalidUnicodeSurrogate => "invalid unicode surrogate",
            ParseError::MissCommaOrSquareBracket => "missing ',' or ']'",
            ParseError::MissKey => "missing object key",
            ParseError::MissColon => "missing ':'",
            ParseError::MissCommaOrCurlyBracket => "missing ',' or '}'",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for ParseError {}
