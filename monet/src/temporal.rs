//! Best effort date and time parsing.
//!
//! Input is matched against a list of layouts ordered from the most specific
//! to the least specific, the first layout that consume the whole input wins.
use time::{
    OffsetDateTime, PrimitiveDateTime,
    format_description::BorrowedFormatItem as I,
    macros::{date, format_description},
};

use crate::{Timestamp, decode::DecodeError};

/// Date of a time only input.
const TIME_ONLY_DATE: time::Date = date!(0000-01-01);

/// Expected components of a layout.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Zoned,
    DateTime,
    Date,
    Time,
}

struct Layout {
    items: &'static [I<'static>],
    kind: Kind,
    /// Whitespace separated token index of a zone abbreviation.
    ///
    /// The numeric offset is authoritative, the abbreviation is only validated.
    zone_name: Option<usize>,
}

const LAYOUTS: &[Layout] = &[
    // 2006-01-02 15:04:05 -0700 MST
    Layout {
        items: format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]] [offset_hour sign:mandatory][offset_minute]"
        ),
        kind: Kind::Zoned,
        zone_name: Some(3),
    },
    // Mon Jan 2 15:04:05 -0700 MST 2006
    Layout {
        items: format_description!(
            "[weekday repr:short] [month repr:short] [day padding:none] [hour]:[minute]:[second][optional [.[subsecond]]] [offset_hour sign:mandatory][offset_minute] [year]"
        ),
        kind: Kind::Zoned,
        zone_name: Some(5),
    },
    // 2006-01-02 15:04:05 -0700
    Layout {
        items: format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]] [offset_hour sign:mandatory][offset_minute]"
        ),
        kind: Kind::Zoned,
        zone_name: None,
    },
    // 2006-01-02 15:04:05.000000-07:00
    Layout {
        items: format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory]:[offset_minute]"
        ),
        kind: Kind::Zoned,
        zone_name: None,
    },
    // 2006-01-02 15:04:05
    Layout {
        items: format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
        ),
        kind: Kind::DateTime,
        zone_name: None,
    },
    // 2006-01-02
    Layout {
        items: format_description!("[year]-[month]-[day]"),
        kind: Kind::Date,
        zone_name: None,
    },
    // 15:04:05
    Layout {
        items: format_description!("[hour]:[minute]:[second][optional [.[subsecond]]]"),
        kind: Kind::Time,
        zone_name: None,
    },
];

/// Parse date, time, or timestamp text.
///
/// Missing date is `0000-01-01`, missing time is midnight, missing offset
/// is left as [`None`].
///
/// ```
/// let ts = monet::temporal::parse("2006-01-02 15:04:05 -0700").unwrap();
/// assert!(ts.offset().is_some());
/// ```
pub fn parse(input: &str) -> Result<Timestamp, DecodeError> {
    for layout in LAYOUTS {
        if let Some(ts) = layout.parse(input) {
            return Ok(ts);
        }
    }
    Err(DecodeError::UnparseableTimestamp(input.into()))
}

impl Layout {
    fn parse(&self, input: &str) -> Option<Timestamp> {
        match self.zone_name {
            Some(nth) => self.parse_items(&strip_zone_name(input, nth)?),
            None => self.parse_items(input),
        }
    }

    fn parse_items(&self, input: &str) -> Option<Timestamp> {
        let ts: Timestamp = match self.kind {
            Kind::Zoned => OffsetDateTime::parse(input, self.items).ok()?.into(),
            Kind::DateTime => PrimitiveDateTime::parse(input, self.items).ok()?.into(),
            Kind::Date => time::Date::parse(input, self.items).ok()?.midnight().into(),
            Kind::Time => {
                let time = time::Time::parse(input, self.items).ok()?;
                PrimitiveDateTime::new(TIME_ONLY_DATE, time).into()
            }
        };
        Some(ts)
    }
}

/// Remove the `nth` space separated token if it is a zone abbreviation.
fn strip_zone_name(input: &str, nth: usize) -> Option<String> {
    let tokens = input.split(' ').collect::<Vec<_>>();
    if !is_zone_name(tokens.get(nth)?) {
        return None;
    }
    let rest = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| (i != nth).then_some(*token))
        .collect::<Vec<_>>();
    Some(rest.join(" "))
}

/// `MST`, `CEST`, `GMT+3`
fn is_zone_name(token: &str) -> bool {
    if let Some(hours) = token.strip_prefix("GMT") {
        if hours.is_empty() {
            return true;
        }
        let Some(digits) = hours.strip_prefix(['+', '-']) else {
            return false;
        };
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        return matches!(digits.parse::<u8>(), Ok(0..=23));
    }

    if matches!(token, "ChST" | "MeST") {
        return true;
    }

    let upper = token.bytes().all(|b| b.is_ascii_uppercase());
    match token.len() {
        3 => upper,
        4 | 5 => upper && token.ends_with('T'),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Date, Time};
    use time::macros::offset;

    #[test]
    fn zoned_over_bare_date() {
        let ts = parse("2006-01-02 15:04:05 -0700").unwrap();
        assert_eq!(ts.date(), Date::new(2006, 1, 2));
        assert_eq!(ts.time(), Time::new(15, 4, 5));
        assert_eq!(ts.offset(), Some(offset!(-7)));
    }

    #[test]
    fn zone_name() {
        let ts = parse("2006-01-02 15:04:05 -0700 MST").unwrap();
        assert_eq!(ts.offset(), Some(offset!(-7)));
        assert_eq!(ts.time(), Time::new(15, 4, 5));

        let ts = parse("Mon Jan 2 15:04:05 -0700 MST 2006").unwrap();
        assert_eq!(ts.date(), Date::new(2006, 1, 2));
        assert_eq!(ts.offset(), Some(offset!(-7)));

        let ts = parse("2006-01-02 15:04:05 +0300 GMT+3").unwrap();
        assert_eq!(ts.offset(), Some(offset!(+3)));

        assert!(parse("2006-01-02 15:04:05 -0700 mst").is_err());
        assert!(parse("2006-01-02 15:04:05 -0700 MSTX").is_err());
        assert!(parse("2006-01-02 15:04:05 +0300 GMT++3").is_err());
    }

    #[test]
    fn monet_timestamptz() {
        let ts = parse("2015-03-04 12:00:00.000000+01:00").unwrap();
        assert_eq!(ts.offset(), Some(offset!(+1)));
        assert_eq!(ts.time(), Time::new(12, 0, 0));
    }

    #[test]
    fn without_offset() {
        let ts = parse("2006-01-02 15:04:05").unwrap();
        assert_eq!(ts.offset(), None);
        assert_eq!(ts.time(), Time::new(15, 4, 5));

        let ts = parse("2006-01-02 15:04:05.123456").unwrap();
        assert_eq!(ts.nanosecond(), 123_456_000);
    }

    #[test]
    fn partial() {
        let ts = parse("2006-01-02").unwrap();
        assert_eq!(ts.date(), Date::new(2006, 1, 2));
        assert_eq!(ts.time(), Time::new(0, 0, 0));

        let ts = parse("15:04:05").unwrap();
        assert_eq!(ts.date(), Date::new(0, 1, 1));
        assert_eq!(ts.time(), Time::new(15, 4, 5));
    }

    #[test]
    fn unparseable() {
        for input in ["", "yesterday", "2006-13-02", "2006-01-02 25:00:00", "2006-01-02T15:04:05", "15:04"] {
            assert!(matches!(
                parse(input),
                Err(DecodeError::UnparseableTimestamp(s)) if s == input
            ));
        }
    }

    #[test]
    fn zone_abbreviation() {
        for ok in ["MST", "UTC", "CEST", "AEDT", "ChST", "GMT", "GMT-11", "GMT+3"] {
            assert!(is_zone_name(ok), "{ok}");
        }
        for bad in ["", "M", "MS", "mst", "CESX", "ABCDEF", "GMT+", "GMT+24", "GMT3", "GMT++3", "GMT-+1"] {
            assert!(!is_zone_name(bad), "{bad}");
        }
    }
}
