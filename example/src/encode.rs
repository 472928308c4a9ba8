use monet::{Date, Encode, EncodeError, Result, Time, Value, encode, encode_any};
use time::macros::datetime;

pub fn main() -> Result<()> {
    let params = [
        Value::from(420),
        Value::from("it's"),
        Value::from(None::<bool>),
        Value::Date(Date::new(2006, 1, 2)),
        Value::Time(Time::new(15, 4, 5)),
    ];

    let literals = params.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
    let sql = format!("INSERT INTO foo VALUES ({})", literals.join(", "));

    tracing::info!("{sql}");
    assert_eq!(
        sql,
        r"INSERT INTO foo VALUES (420, 'it\'s', NULL, '2006-01-02', '15:04:05')"
    );

    let ts = datetime!(2006-01-02 15:04:05 -7).encode()?;
    assert_eq!(ts, "'2006-01-02 15:04:05 -0700'");

    // shape resolved at runtime
    assert_eq!(encode_any(&1.5f64)?, "1.5");
    assert!(matches!(encode_any(&'c'), Err(EncodeError::UnsupportedType(_))));

    Ok(())
}
