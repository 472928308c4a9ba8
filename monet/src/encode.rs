//! Query literal encoding.
//!
//! - [`Encode`], value that can be rendered as a literal
//! - [`encode`], render a [`Value`]
//! - [`encode_any`], render any value of a supported shape, resolved at runtime
//!
//! Numeric and boolean are rendered unquoted, text and calendar values are
//! quoted with [`escape`].
//!
//! ```
//! use monet::{Value, encode};
//!
//! assert_eq!(encode(&Value::Null).unwrap(), "NULL");
//! assert_eq!(encode(&Value::from("it's")).unwrap(), r"'it\'s'");
//! ```
use bytes::Bytes;
use std::{any::Any, fmt};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{
    Date, Time, Timestamp, Value,
    common::{debug_display, span, verbose},
    escape::escape,
};

/// Unquoted null literal.
const NULL: &str = "NULL";

/// Value that can be rendered as query literal.
pub trait Encode {
    /// Render self as query literal.
    fn encode(&self) -> Result<String, EncodeError>;
}

/// Render value as query literal.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    value.encode()
}

/// Render value whose shape is only known at runtime.
///
/// Fail with [`EncodeError::UnsupportedType`] if `T` is not one of the type
/// that implement [`Encode`] in this crate.
///
/// ```
/// assert_eq!(monet::encode_any(&420i32).unwrap(), "420");
/// assert!(monet::encode_any(&std::time::Instant::now()).is_err());
/// ```
pub fn encode_any<T: Any>(value: &T) -> Result<String, EncodeError> {
    let any = value as &dyn Any;

    macro_rules! downcast {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(value) = any.downcast_ref::<$ty>() {
                    return value.encode();
                }
            )*
        };
    }

    downcast! {
        Value, (),
        bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64,
        &'static str, String, Vec<u8>, Bytes,
        Date, Time, Timestamp,
        time::Date, time::Time, PrimitiveDateTime, OffsetDateTime,
    }

    Err(EncodeError::UnsupportedType(std::any::type_name::<T>()))
}

impl Encode for Value {
    fn encode(&self) -> Result<String, EncodeError> {
        span!("encode", shape = self.shape());
        let literal = match self {
            Value::Null => ().encode(),
            Value::Bool(b) => b.encode(),
            Value::Int8(i) => i.encode(),
            Value::Int16(i) => i.encode(),
            Value::Int32(i) => i.encode(),
            Value::Int64(i) => i.encode(),
            Value::Float32(f) => f.encode(),
            Value::Float64(f) => f.encode(),
            Value::String(s) => s.encode(),
            Value::Bytes(b) => b.encode(),
            Value::Date(d) => d.encode(),
            Value::Time(t) => t.encode(),
            Value::Timestamp(t) => t.encode(),
        }?;
        verbose!(%literal, "encode");
        Ok(literal)
    }
}

impl Encode for () {
    fn encode(&self) -> Result<String, EncodeError> {
        Ok(NULL.to_owned())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Result<String, EncodeError> {
        match self {
            Some(value) => value.encode(),
            None => ().encode(),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Result<String, EncodeError> {
        T::encode(self)
    }
}

impl Encode for bool {
    fn encode(&self) -> Result<String, EncodeError> {
        Ok(if *self { "true" } else { "false" }.to_owned())
    }
}

macro_rules! integer {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Result<String, EncodeError> {
                    Ok(itoa::Buffer::new().format(*self).to_owned())
                }
            }
        )*
    };
}

integer!(i8, i16, i32, i64, u8, u16, u32);

/// Unsigned integer above `i64::MAX` does not fit any column type.
macro_rules! unsigned {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Result<String, EncodeError> {
                    match i64::try_from(*self) {
                        Ok(i) => i.encode(),
                        Err(_) => Err(EncodeError::OutOfRange(stringify!($ty))),
                    }
                }
            }
        )*
    };
}

unsigned!(u64, usize);

macro_rules! float {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Result<String, EncodeError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

float!(f32, f64);

impl Encode for str {
    fn encode(&self) -> Result<String, EncodeError> {
        Ok(escape(self))
    }
}

impl Encode for String {
    fn encode(&self) -> Result<String, EncodeError> {
        Ok(escape(self))
    }
}

/// Bytes are rendered through their text content, invalid utf8 is replaced
/// with `U+FFFD`, so non text binary does not survive a round trip.
impl Encode for [u8] {
    fn encode(&self) -> Result<String, EncodeError> {
        Ok(escape(&String::from_utf8_lossy(self)))
    }
}

impl Encode for Vec<u8> {
    fn encode(&self) -> Result<String, EncodeError> {
        self.as_slice().encode()
    }
}

impl Encode for Bytes {
    fn encode(&self) -> Result<String, EncodeError> {
        self[..].encode()
    }
}

macro_rules! display {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Result<String, EncodeError> {
                    Ok(escape(&self.to_string()))
                }
            }
        )*
    };
}

display!(Date, Time, Timestamp);

macro_rules! calendar {
    ($($ty:ty => $into:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Result<String, EncodeError> {
                    <$into>::from(*self).encode()
                }
            }
        )*
    };
}

calendar! {
    time::Date => Date,
    time::Time => Time,
    PrimitiveDateTime => Timestamp,
    OffsetDateTime => Timestamp
}

/// An error when encoding query literal.
pub enum EncodeError {
    /// Value shape has no encode rule.
    UnsupportedType(&'static str),
    /// Value does not fit any column type.
    OutOfRange(&'static str),
}

impl std::error::Error for EncodeError { }

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to encode value, ")?;
        match self {
            Self::UnsupportedType(name) => write!(f, "type not supported: {name}"),
            Self::OutOfRange(name) => write!(f, "`{name}` value out of range"),
        }
    }
}

debug_display!(EncodeError);

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::{date, datetime, time};

    #[test]
    fn null_literal() {
        assert_eq!(encode(&Value::Null).unwrap(), "NULL");
        let _ = encode(&Value::from("noise"));
        assert_eq!(encode(&Value::Null).unwrap(), "NULL");
        assert_eq!(None::<i32>.encode().unwrap(), "NULL");
        assert_eq!(().encode().unwrap(), "NULL");
    }

    #[test]
    fn unquoted_scalars() {
        assert_eq!(encode(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(encode(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(encode(&Value::Int8(-128)).unwrap(), "-128");
        assert_eq!(encode(&Value::Int64(i64::MAX)).unwrap(), "9223372036854775807");
        assert_eq!(encode(&Value::Float32(1.5)).unwrap(), "1.5");
        assert_eq!(encode(&Value::Float64(-0.25)).unwrap(), "-0.25");
        assert_eq!(Some(7u8).encode().unwrap(), "7");
        assert_eq!(u64::MAX.encode().unwrap_err().to_string(), "failed to encode value, `u64` value out of range");
        assert_eq!((i64::MAX as u64).encode().unwrap(), "9223372036854775807");
    }

    #[test]
    fn quoted_text() {
        assert_eq!(encode(&Value::from("it's")).unwrap(), r"'it\'s'");
        assert_eq!(encode(&Value::from(r"C:\dir")).unwrap(), r"'C:\\dir'");
        assert_eq!("plain".encode().unwrap(), "'plain'");
        assert_eq!(String::from("").encode().unwrap(), "''");
    }

    #[test]
    fn calendar() {
        assert_eq!(encode(&Value::Date(Date::new(2006, 1, 2))).unwrap(), "'2006-01-02'");
        assert_eq!(encode(&Value::Time(Time::new(5, 4, 3))).unwrap(), "'05:04:03'");
        assert_eq!(date!(2006-01-02).encode().unwrap(), "'2006-01-02'");
        assert_eq!(time!(15:04:05).encode().unwrap(), "'15:04:05'");
        assert_eq!(datetime!(2006-01-02 15:04:05).encode().unwrap(), "'2006-01-02 15:04:05'");
        assert_eq!(
            datetime!(2006-01-02 15:04:05 -7).encode().unwrap(),
            "'2006-01-02 15:04:05 -0700'"
        );
    }

    #[test]
    fn bytes_through_text() {
        assert_eq!(encode(&Value::from(b"ab'c".to_vec())).unwrap(), r"'ab\'c'");
        // invalid utf8 is not preserved
        let literal = encode(&Value::Bytes(Bytes::from_static(b"a\xffb"))).unwrap();
        assert_eq!(literal, "'a\u{fffd}b'");
    }

    #[test]
    fn dynamic_shape() {
        assert_eq!(encode_any(&Value::Int32(1)).unwrap(), "1");
        assert_eq!(encode_any(&()).unwrap(), "NULL");
        assert_eq!(encode_any(&true).unwrap(), "true");
        assert_eq!(encode_any(&"it's").unwrap(), r"'it\'s'");
        assert_eq!(encode_any(&String::from("x")).unwrap(), "'x'");
        assert_eq!(encode_any(&vec![b'x']).unwrap(), "'x'");
        assert_eq!(encode_any(&Date::new(2006, 1, 2)).unwrap(), "'2006-01-02'");

        struct Foreign;
        let err = encode_any(&Foreign).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedType(name) if name.ends_with("Foreign")));
        assert!(matches!(encode_any(&'c'), Err(EncodeError::UnsupportedType("char"))));
    }
}
