use serde::{Serialize, Serializer};

use crate::{Date, Time, Timestamp, Value};

/// Calendar values are serialized as their canonical text.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int8(i) => serializer.serialize_i8(*i),
            Value::Int16(i) => serializer.serialize_i16(*i),
            Value::Int32(i) => serializer.serialize_i32(*i),
            Value::Int64(i) => serializer.serialize_i64(*i),
            Value::Float32(f) => serializer.serialize_f32(*f),
            Value::Float64(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Date(d) => d.serialize(serializer),
            Value::Time(t) => t.serialize(serializer),
            Value::Timestamp(t) => t.serialize(serializer),
        }
    }
}

macro_rules! display {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

display!(Date);
display!(Time);
display!(Timestamp);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_row() {
        let row = vec![
            Value::Null,
            Value::Int32(420),
            Value::String("it's".into()),
            Value::Date(Date::new(2006, 1, 2)),
            Value::Time(Time::new(15, 4, 5)),
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[null,420,"it's","2006-01-02","15:04:05"]"#);
    }
}
