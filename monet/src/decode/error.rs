use std::{
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::{TypeTag, common::{debug_display, from}, escape::EscapeError};

/// An error when decoding column text.
pub enum DecodeError {
    /// Type name is outside the known vocabulary.
    UnsupportedType(String),
    /// Text does not match the grammar of its declared type.
    MalformedValue(TypeTag, Malformed),
    /// Numeric value exceeds the declared width.
    OutOfRange(TypeTag),
    /// Invalid escape sequence inside quoted text.
    MalformedEscape(EscapeError),
    /// No temporal layout matched the text.
    UnparseableTimestamp(String),
    /// Number of cells and number of column types differ.
    ColumnCount {
        cells: usize,
        tags: usize,
    },
}

/// Reason of [`DecodeError::MalformedValue`].
pub enum Malformed {
    Int(ParseIntError),
    Float(ParseFloatError),
    /// Not one of boolean literal.
    Bool,
    /// Text too short to contain surrounding quote.
    Unquoted,
}

impl std::error::Error for DecodeError { }

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to decode value, ")?;
        match self {
            Self::UnsupportedType(name) => write!(f, "type not supported: {name:?}"),
            Self::MalformedValue(tag, reason) => write!(f, "malformed `{tag}`: {reason}"),
            Self::OutOfRange(tag) => write!(f, "value out of range for `{tag}`"),
            Self::MalformedEscape(e) => write!(f, "{e}"),
            Self::UnparseableTimestamp(text) => write!(f, "unparseable timestamp: {text:?}"),
            Self::ColumnCount { cells, tags } => {
                write!(f, "row has {cells} cells but {tags} column types")
            }
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(e) => e.fmt(f),
            Self::Float(e) => e.fmt(f),
            Self::Bool => f.write_str("invalid boolean literal"),
            Self::Unquoted => f.write_str("expected quoted text"),
        }
    }
}

debug_display!(DecodeError);
debug_display!(Malformed);

from!(DecodeError, <EscapeError>e => Self::MalformedEscape(e));
