//! Column text decoding.
//!
//! Each cell arrive as text alongside its declared [`TypeTag`]. The tag
//! select a decode rule, which produce a [`Value`].
//!
//! ```
//! use monet::{Value, decode};
//!
//! assert_eq!(decode("127", "tinyint").unwrap(), Value::Int8(127));
//! assert_eq!(decode(r"'it\'s'", "varchar").unwrap(), Value::String("it's".into()));
//! assert!(decode("128", "tinyint").is_err());
//! ```
use bytes::Bytes;
use std::{
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use crate::{
    Error, Result, TypeTag, Value,
    common::{span, verbose},
    escape::unescape,
    temporal,
};

mod error;

pub use error::{DecodeError, Malformed};

/// Unquoted null marker.
const NULL: &str = "NULL";

/// Decode column text with type name `tag`.
///
/// Fail with [`DecodeError::UnsupportedType`] if `tag` is not a known type
/// name.
pub fn decode(raw: &str, tag: &str) -> Result<Value, DecodeError> {
    decode_as(raw, TypeTag::parse(tag)?)
}

/// Decode column text with a resolved [`TypeTag`].
pub fn decode_as(raw: &str, tag: TypeTag) -> Result<Value, DecodeError> {
    span!("decode", %tag);
    let text = raw.trim();
    verbose!(text, "decode");

    if text == NULL {
        return Ok(Value::Null);
    }

    use TypeTag as T;

    let value = match tag {
        T::Char | T::Varchar | T::Clob | T::Interval | T::MonthInterval | T::SecInterval => {
            Value::String(unescape(strip(text, tag)?)?.into_owned())
        }
        T::Uuid => Value::String(unescape(text)?.into_owned()),
        T::Blob => Value::Bytes(Bytes::copy_from_slice(strip(text, tag)?.as_bytes())),
        T::Decimal | T::Double => Value::Float64(float64(text, tag)?),
        T::Real => Value::Float32(float32(text, tag)?),
        T::TinyInt => Value::Int8(integer(text, tag)?),
        T::SmallInt => Value::Int16(integer(text, tag)?),
        T::Int => Value::Int32(integer(text, tag)?),
        T::BigInt | T::HugeInt | T::Serial => Value::Int64(integer(text, tag)?),
        T::Boolean => Value::Bool(boolean(text, tag)?),
        T::Date => Value::Date(temporal::parse(text)?.date()),
        T::Time => Value::Time(temporal::parse(text)?.time()),
        T::Timestamp | T::Timestamptz => Value::Timestamp(temporal::parse(text)?),
    };

    Ok(value)
}

/// Decode a row of cells, each with the type at the same index.
///
/// Stop at the first failing cell, the error context contain its column
/// index.
pub fn decode_row<S: AsRef<str>>(cells: &[S], tags: &[TypeTag]) -> Result<Vec<Value>> {
    if cells.len() != tags.len() {
        return Err(DecodeError::ColumnCount { cells: cells.len(), tags: tags.len() }.into());
    }

    cells
        .iter()
        .zip(tags)
        .enumerate()
        .map(|(i, (cell, &tag))| {
            decode_as(cell.as_ref(), tag)
                .map_err(|err| Error::from(err).context(format!("column {i}")))
        })
        .collect()
}

/// Remove the surrounding quote character.
fn strip(text: &str, tag: TypeTag) -> Result<&str, DecodeError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => Ok(chars.as_str()),
        _ => Err(DecodeError::MalformedValue(tag, Malformed::Unquoted)),
    }
}

fn integer<I>(text: &str, tag: TypeTag) -> Result<I, DecodeError>
where
    I: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::OutOfRange(tag),
        _ => DecodeError::MalformedValue(tag, Malformed::Int(err)),
    })
}

macro_rules! float {
    ($name:ident, $ty:ty) => {
        /// Overflow is parsed as infinity, which is only accepted when
        /// spelled out.
        fn $name(text: &str, tag: TypeTag) -> Result<$ty, DecodeError> {
            let value = text
                .parse::<$ty>()
                .map_err(|err| DecodeError::MalformedValue(tag, Malformed::Float(err)))?;
            if value.is_infinite() && !text.contains(['i', 'I']) {
                return Err(DecodeError::OutOfRange(tag));
            }
            Ok(value)
        }
    };
}

float!(float32, f32);
float!(float64, f64);

fn boolean(text: &str, tag: TypeTag) -> Result<bool, DecodeError> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(DecodeError::MalformedValue(tag, Malformed::Bool)),
    }
}
