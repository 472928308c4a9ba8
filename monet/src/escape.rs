//! String literal escaping.
//!
//! - [`escape`] turn raw string into a quoted sql literal
//! - [`unescape`] turn escaped wire token back into raw string
use std::{borrow::Cow, fmt};

use crate::common::{debug_display, warning};

/// Quote `raw` as sql string literal.
///
/// Backslash is doubled, single quote is prefixed with backslash, then the
/// result is wrapped in single quote.
///
/// ```
/// assert_eq!(monet::escape::escape("it's"), r"'it\'s'");
/// ```
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('\'');
    escape_into(raw, &mut out);
    out.push('\'');
    out
}

/// Same as [`escape`] without the surrounding quote.
pub fn escape_body(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(raw, &mut out);
    out
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            ch => out.push(ch),
        }
    }
}

/// Resolve escape sequences in `s`.
///
/// `s` is the token content with its surrounding quote already stripped.
/// String without any backslash is returned borrowed.
///
/// Recognized sequences, after a backslash:
///
/// - `a` `b` `f` `n` `r` `t` `v`, control characters
/// - `\` `'` `"`, the character itself
/// - `xHH`, a single byte
/// - `OOO`, three octal digits, a single byte up to `\377`
/// - `uHHHH` and `UHHHHHHHH`, unicode scalar value
///
/// Single byte escapes may spell out a multi byte utf8 sequence, the final
/// output must be valid utf8.
pub fn unescape(s: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !s.contains('\\') {
        return Ok(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    let mut buf = Vec::with_capacity(3 * s.len() / 2);
    let mut read = 0;

    while let Some(idx) = find_backslash(&bytes[read..]) {
        let start = read + idx;
        buf.extend_from_slice(&bytes[read..start]);
        read = match unescape_one(s, start, &mut buf) {
            Ok(ok) => ok,
            Err(err) => {
                warning!("{err} -> {s:?}");
                return Err(err);
            }
        };
    }
    buf.extend_from_slice(&bytes[read..]);

    match String::from_utf8(buf) {
        Ok(ok) => Ok(Cow::Owned(ok)),
        Err(err) => Err(EscapeError::new(err.utf8_error().valid_up_to(), "invalid utf8 sequence")),
    }
}

fn find_backslash(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == b'\\')
}

/// Decode escape sequence at `start`, returns offset right after it.
fn unescape_one(s: &str, start: usize, buf: &mut Vec<u8>) -> Result<usize, EscapeError> {
    let rest = &s.as_bytes()[start + 1..];
    let Some(&c) = rest.first() else {
        return Err(EscapeError::new(start, "trailing backslash"));
    };

    let simple = match c {
        b'a' => Some(b'\x07'),
        b'b' => Some(b'\x08'),
        b'f' => Some(b'\x0c'),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(b'\x0b'),
        b'\\' | b'\'' | b'"' => Some(c),
        _ => None,
    };
    if let Some(b) = simple {
        buf.push(b);
        return Ok(start + 2);
    }

    match c {
        b'x' => {
            let value = digits(rest, 1, 2, 16).ok_or(EscapeError::new(start, "expected 2 hex digits"))?;
            buf.push(value as u8);
            Ok(start + 4)
        }
        b'0'..=b'7' => {
            let value = digits(rest, 0, 3, 8).ok_or(EscapeError::new(start, "expected 3 octal digits"))?;
            let Ok(value) = u8::try_from(value) else {
                return Err(EscapeError::new(start, "octal escape value > 255"));
            };
            buf.push(value);
            Ok(start + 4)
        }
        b'u' | b'U' => {
            let len = if c == b'u' { 4 } else { 8 };
            let value = digits(rest, 1, len, 16).ok_or(EscapeError::new(start, "expected hex digits"))?;
            let Some(ch) = char::from_u32(value) else {
                return Err(EscapeError::new(start, "invalid unicode code point"));
            };
            buf.extend_from_slice(ch.encode_utf8(&mut [0u8; 4]).as_bytes());
            Ok(start + 2 + len)
        }
        _ => Err(EscapeError::new(start, "unknown escape sequence")),
    }
}

/// Read `len` digits of `radix` from `bytes[offset..]`.
fn digits(bytes: &[u8], offset: usize, len: usize, radix: u32) -> Option<u32> {
    let digits = bytes.get(offset..offset + len)?;
    digits.iter().try_fold(0u32, |acc, &b| {
        let d = (b as char).to_digit(radix)?;
        Some(acc * radix + d)
    })
}

/// An error when string contains malformed escape sequence.
pub struct EscapeError {
    offset: usize,
    reason: &'static str,
}

impl EscapeError {
    fn new(offset: usize, reason: &'static str) -> Self {
        Self { offset, reason }
    }

    /// Byte offset of the offending sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::error::Error for EscapeError { }

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed escape at byte {}: {}", self.offset, self.reason)
    }
}

debug_display!(EscapeError);
