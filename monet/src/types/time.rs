use time::{Month, OffsetDateTime, PrimitiveDateTime, UtcOffset, error::ComponentRange};

use crate::{Date, Time, Timestamp, Value};

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Date::new(date.year(), date.month() as u8, date.day())
    }
}

impl TryFrom<Date> for time::Date {
    type Error = ComponentRange;

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        time::Date::from_calendar_date(date.year, Month::try_from(date.month)?, date.day)
    }
}

impl From<time::Time> for Time {
    fn from(time: time::Time) -> Self {
        let (hour, minute, second) = time.as_hms();
        Time::new(hour, minute, second)
    }
}

impl TryFrom<Time> for time::Time {
    type Error = ComponentRange;

    fn try_from(time: Time) -> Result<Self, Self::Error> {
        time::Time::from_hms(time.hour, time.minute, time.second)
    }
}

impl From<PrimitiveDateTime> for Timestamp {
    fn from(datetime: PrimitiveDateTime) -> Self {
        Timestamp::new(datetime)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(datetime: OffsetDateTime) -> Self {
        Timestamp::with_offset(
            PrimitiveDateTime::new(datetime.date(), datetime.time()),
            datetime.offset(),
        )
    }
}

/// Timestamp without offset is assumed to be utc.
impl From<Timestamp> for OffsetDateTime {
    fn from(ts: Timestamp) -> Self {
        ts.datetime().assume_offset(ts.offset().unwrap_or(UtcOffset::UTC))
    }
}

impl From<Timestamp> for PrimitiveDateTime {
    fn from(ts: Timestamp) -> Self {
        ts.datetime()
    }
}

macro_rules! value {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value.into())
            }
        }
    };
}

value!(time::Date, Date);
value!(time::Time, Time);
value!(PrimitiveDateTime, Timestamp);
value!(OffsetDateTime, Timestamp);

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::{date, datetime, offset, time};

    #[test]
    fn date_conversion() {
        assert_eq!(Date::from(date!(2024-02-29)), Date::new(2024, 2, 29));
        assert_eq!(time::Date::try_from(Date::new(2024, 2, 29)).unwrap(), date!(2024-02-29));
        assert!(time::Date::try_from(Date::new(2023, 2, 29)).is_err());
        assert!(time::Date::try_from(Date::new(2023, 13, 1)).is_err());
    }

    #[test]
    fn time_conversion() {
        assert_eq!(Time::from(time!(23:59:58.5)), Time::new(23, 59, 58));
        assert_eq!(time::Time::try_from(Time::new(1, 2, 3)).unwrap(), time!(1:02:03));
        assert!(time::Time::try_from(Time::new(24, 0, 0)).is_err());
    }

    #[test]
    fn timestamp_conversion() {
        let odt = datetime!(2006-01-02 15:04:05 -7);
        let ts = Timestamp::from(odt);
        assert_eq!(ts.offset(), Some(offset!(-7)));
        assert_eq!(ts.time(), Time::new(15, 4, 5));
        assert_eq!(OffsetDateTime::from(ts), odt);

        let ts = Timestamp::from(datetime!(2006-01-02 15:04:05));
        assert_eq!(OffsetDateTime::from(ts), datetime!(2006-01-02 15:04:05 UTC));
        assert_eq!(Value::from(date!(2006-01-02)), Value::Date(Date::new(2006, 1, 2)));
    }
}
