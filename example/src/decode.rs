use monet::{Date, DecodeError, ErrorKind, Result, TypeTag, Value, decode, decode_row};
use time::OffsetDateTime;

pub fn main() -> Result<()> {
    // column types as announced by the result set header
    let tags = ["int", "varchar", "boolean", "date", "timestamptz", "blob"]
        .map(TypeTag::parse)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let cells = [
        "420",
        r"'it\'s'",
        "true",
        "2006-01-02",
        "2006-01-02 15:04:05.000000-07:00",
        "NULL",
    ];

    let row = decode_row(&cells, &tags)?;

    assert_eq!(row[0], Value::Int32(420));
    assert_eq!(row[1].as_str(), Some("it's"));
    assert_eq!(row[2], Value::Bool(true));
    assert_eq!(row[3], Value::Date(Date::new(2006, 1, 2)));
    assert!(row[5].is_null());

    let Value::Timestamp(ts) = row[4] else {
        unreachable!("timestamptz always decode to timestamp")
    };
    let utc = OffsetDateTime::from(ts).to_offset(time::UtcOffset::UTC);
    assert_eq!(utc.hour(), 22);

    tracing::info!("{}", serde_json::to_string(&row).unwrap_or_default());

    // error are local to a single cell
    let err = decode_row(&["1", "'one'", "yes"], &tags[..3]).unwrap_err();
    tracing::info!("{err:#}");
    assert!(matches!(err.kind(), ErrorKind::Decode(DecodeError::MalformedValue(..))));

    assert!(matches!(decode("128", "tinyint"), Err(DecodeError::OutOfRange(_))));
    assert!(matches!(decode("1", "geometry"), Err(DecodeError::UnsupportedType(_))));

    Ok(())
}
