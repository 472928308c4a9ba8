//! Typed column value.
use bytes::Bytes;
use std::fmt;
use time::{PrimitiveDateTime, UtcOffset};

use crate::ext::FmtExt;

/// Value that can be decoded from, or encoded to, MonetDB text.
#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bytes(Bytes),
    Date(Date),
    Time(Time),
    Timestamp(Timestamp),
}

/// Calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Time of day, without fractional second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Calendar instant with optional utc offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    datetime: PrimitiveDateTime,
    offset: Option<UtcOffset>,
}

impl Value {
    /// Returns the variant name.
    pub const fn shape(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int8(_) => "int8",
            Value::Int16(_) => "int16",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Timestamp(_) => "timestamp",
        }
    }

    /// Return `true` if value is NULL.
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns any integer variant widened to `i64`.
    pub const fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int8(i) => Some(i as i64),
            Value::Int16(i) => Some(i as i64),
            Value::Int32(i) => Some(i as i64),
            Value::Int64(i) => Some(i),
            _ => None,
        }
    }

    /// Returns any floating point variant widened to `f64`.
    pub const fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float32(f) => Some(f as f64),
            Value::Float64(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl Date {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl Time {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second }
    }
}

impl Timestamp {
    /// Timestamp without offset.
    pub const fn new(datetime: PrimitiveDateTime) -> Self {
        Self { datetime, offset: None }
    }

    /// Timestamp with utc offset.
    pub const fn with_offset(datetime: PrimitiveDateTime, offset: UtcOffset) -> Self {
        Self { datetime, offset: Some(offset) }
    }

    pub const fn date(&self) -> Date {
        let date = self.datetime.date();
        Date::new(date.year(), date.month() as u8, date.day())
    }

    pub const fn time(&self) -> Time {
        let (hour, minute, second) = self.datetime.as_hms();
        Time::new(hour, minute, second)
    }

    pub const fn nanosecond(&self) -> u32 {
        self.datetime.nanosecond()
    }

    pub const fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    /// Returns the local date and time, ignoring offset.
    pub const fn datetime(&self) -> PrimitiveDateTime {
        self.datetime
    }
}

macro_rules! from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value.into())
            }
        }
    };
}

from!(bool, Bool);
from!(i8, Int8);
from!(i16, Int16);
from!(i32, Int32);
from!(i64, Int64);
from!(u8, Int16);
from!(u16, Int32);
from!(u32, Int64);
from!(f32, Float32);
from!(f64, Float64);
from!(&str, String);
from!(String, String);
from!(Vec<u8>, Bytes);
from!(&'static [u8], Bytes);
from!(Bytes, Bytes);
from!(Date, Date);
from!(Time, Time);
from!(Timestamp, Timestamp);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => fmt::Debug::fmt(b, f),
            Value::Int8(i) => fmt::Debug::fmt(i, f),
            Value::Int16(i) => fmt::Debug::fmt(i, f),
            Value::Int32(i) => fmt::Debug::fmt(i, f),
            Value::Int64(i) => fmt::Debug::fmt(i, f),
            Value::Float32(n) => fmt::Debug::fmt(n, f),
            Value::Float64(n) => fmt::Debug::fmt(n, f),
            Value::String(s) => fmt::Debug::fmt(s, f),
            Value::Bytes(b) => fmt::Debug::fmt(&b.lossy(), f),
            Value::Date(d) => fmt::Display::fmt(d, f),
            Value::Time(t) => fmt::Display::fmt(t, f),
            Value::Timestamp(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// `YYYY-MM-DD HH:MM:SS[.fraction][ +hhmm]`
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date(), self.time())?;

        let nano = self.nanosecond();
        if nano != 0 {
            let frac = format!("{nano:09}");
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }

        if let Some(offset) = self.offset {
            let (h, m, _) = offset.as_hms();
            let sign = if offset.is_negative() { '-' } else { '+' };
            write!(f, " {sign}{:02}{:02}", h.unsigned_abs(), m.unsigned_abs())?;
        }

        Ok(())
    }
}
