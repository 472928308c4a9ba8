use monet::{Config, Result};

pub fn main() -> Result<()> {
    // will read `MONETDB_*` or the `DATABASE_URL` environment variable
    let config = Config::from_env();
    tracing::info!(
        host = config.host(),
        port = config.port(),
        database = config.database(),
        "config from env"
    );

    let config: Config = "monetdb:monetdb@localhost:50000/demo".parse()?;

    assert_eq!(config.user(), "monetdb");
    assert_eq!(config.port(), 50000);
    assert_eq!(config.database(), "demo");

    let err = Config::parse("localhost").unwrap_err();
    tracing::info!("{err}");

    Ok(())
}
