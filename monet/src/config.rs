//! MonetDB connection address.
use std::{borrow::Cow, env::var, fmt};

use crate::common::debug_display;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 50000;
const DEFAULT_USER: &str = "monetdb";
const DEFAULT_PASS: &str = "monetdb";

/// MonetDB connection config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) user: String,
    pub(crate) pass: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) database: String,
}

impl Config {
    /// Retrieve configuration from environment variable.
    ///
    /// It reads:
    /// - `MONETDB_USER`
    /// - `MONETDB_PASSWORD`
    /// - `MONETDB_HOST`
    /// - `MONETDB_PORT`
    /// - `MONETDB_DATABASE`
    ///
    /// Additionally, it also read `DATABASE_URL` to provide missing value from
    /// previous variables before fallback to default value.
    pub fn from_env() -> Config {
        Self::from_lookup(|name| var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Config {
        let url = var("DATABASE_URL").and_then(|e| Config::parse(&e).ok());

        macro_rules! env {
            ($name:literal,$or:ident,$def:expr) => {
                match (var($name),url.as_ref()) {
                    (Some(ok),_) => ok,
                    (None,Some(e)) => e.$or.clone(),
                    (None,None) => $def.into(),
                }
            };
        }

        let user: String = env!("MONETDB_USER",user,DEFAULT_USER);
        let pass = env!("MONETDB_PASSWORD",pass,DEFAULT_PASS);
        let host = env!("MONETDB_HOST",host,DEFAULT_HOST);
        let database = env!("MONETDB_DATABASE",database,user.clone());

        let port = match (var("MONETDB_PORT"),url.as_ref()) {
            (Some(ok),_) => ok.parse().unwrap_or(DEFAULT_PORT),
            (None,Some(e)) => e.port,
            (None,None) => DEFAULT_PORT,
        };

        Self { user, pass, host, port, database }
    }

    /// Parse config from address.
    ///
    /// The format is `[user[:password]@]host[:port]/database`, port default
    /// to `50000`. Username may contain `@`, the credential end at the first
    /// `@` that leave a valid address behind it.
    ///
    /// ```
    /// let config = monet::Config::parse("monetdb:secret@db.local:50001/demo").unwrap();
    /// assert_eq!(config.host(), "db.local");
    /// assert_eq!(config.port(), 50001);
    /// ```
    pub fn parse(dsn: &str) -> Result<Config, ParseError> {
        let mut first_err = None;

        for (at, _) in dsn.match_indices('@') {
            match Self::parse_address(Some(&dsn[..at]), &dsn[at + 1..]) {
                Ok(ok) => return Ok(ok),
                Err(err) => { first_err.get_or_insert(err); },
            }
        }

        match Self::parse_address(None, dsn) {
            Ok(ok) => Ok(ok),
            Err(err) => Err(first_err.unwrap_or(err)),
        }
    }

    fn parse_address(credential: Option<&str>, read: &str) -> Result<Config, ParseError> {
        let (user, pass) = match credential {
            Some(credential) => {
                let (user, pass) = match credential.split_once(':') {
                    Some((user, pass)) => (user, pass),
                    None => (credential, ""),
                };
                if user.is_empty() {
                    return Err(ParseError::new("username missing"));
                }
                if pass.is_empty() && credential.contains(':') {
                    return Err(ParseError::new("password missing"));
                }
                if pass.contains('@') {
                    return Err(ParseError::new("invalid password"));
                }
                (user, pass)
            }
            None => ("", ""),
        };

        let Some((address, database)) = read.split_once('/') else {
            return Err(ParseError::new("database missing"));
        };

        if database.is_empty() {
            return Err(ParseError::new("database missing"));
        }

        let (host, port) = match address.split_once(':') {
            Some((host, port)) => {
                if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::new("invalid port"));
                }
                let Ok(port) = port.parse() else {
                    return Err(ParseError::new("invalid port"));
                };
                (host, port)
            }
            None => (address, DEFAULT_PORT),
        };

        if host.is_empty() {
            return Err(ParseError::new("host missing"));
        }

        if !host.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-')) {
            return Err(ParseError::new("invalid host"));
        }

        Ok(Self {
            user: user.into(),
            pass: pass.into(),
            host: host.into(),
            port,
            database: database.into(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.pass
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.into(),
            pass: DEFAULT_PASS.into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            database: DEFAULT_USER.into(),
        }
    }
}

impl std::str::FromStr for Config {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error when parsing address.
pub struct ParseError {
    reason: Cow<'static,str>,
}

impl ParseError {
    fn new(reason: impl Into<Cow<'static,str>>) -> Self {
        Self { reason: reason.into() }
    }
}

impl std::error::Error for ParseError { }

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.reason)
        }
        write!(f, "failed to parse address: {}", self.reason)
    }
}

debug_display!(ParseError);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_full() {
        let config = Config::parse("user2:passwd@localhost:50001/demo").unwrap();
        assert_eq!(config.user(), "user2");
        assert_eq!(config.password(), "passwd");
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.port(), 50001);
        assert_eq!(config.database(), "demo");

        let config = Config::parse("me@corp:pw@host/db").unwrap();
        assert_eq!(config.user(), "me@corp");
        assert_eq!(config.password(), "pw");
        assert_eq!(config.host(), "host");
        assert_eq!(config.port(), 50000);
        assert_eq!(config.database(), "db");

        let config = Config::parse("me@corp@host:50001/db@archive").unwrap();
        assert_eq!(config.user(), "me@corp");
        assert_eq!(config.password(), "");
        assert_eq!(config.port(), 50001);
        assert_eq!(config.database(), "db@archive");
    }

    #[test]
    fn parse_minimal() {
        let config = Config::parse("db-1.example.com/demo").unwrap();
        assert_eq!(config.user(), "");
        assert_eq!(config.password(), "");
        assert_eq!(config.host(), "db-1.example.com");
        assert_eq!(config.port(), 50000);
        assert_eq!(config.database(), "demo");

        let config: Config = "monetdb@localhost/a/b".parse().unwrap();
        assert_eq!(config.user(), "monetdb");
        assert_eq!(config.password(), "");
        assert_eq!(config.database(), "a/b");

        let config = Config::parse("localhost/db@archive").unwrap();
        assert_eq!(config.user(), "");
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.database(), "db@archive");
    }

    #[test]
    fn parse_invalid() {
        for (dsn, reason) in [
            ("localhost", "database missing"),
            ("localhost/", "database missing"),
            ("localhost:port/demo", "invalid port"),
            ("localhost:99999/demo", "invalid port"),
            ("localhost:/demo", "invalid port"),
            ("/demo", "host missing"),
            ("local_host/demo", "invalid host"),
            (":pass@localhost/demo", "username missing"),
            ("user:@localhost/demo", "password missing"),
        ] {
            let err = Config::parse(dsn).unwrap_err();
            assert_eq!(format!("{err:#}"), reason, "{dsn}");
        }

        // password cannot contain `@`
        assert!(Config::parse("user:p@ss@localhost/demo").is_err());
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| vars.iter().find(|(k, _)| *k == name).map(|(_, v)| v.to_string())
    }

    #[test]
    fn env_fallback() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.database(), "monetdb");

        let config = Config::from_lookup(lookup(&[("MONETDB_USER", "alice")]));
        assert_eq!(config.user(), "alice");
        assert_eq!(config.password(), "monetdb");
        assert_eq!(config.database(), "alice");

        let url = [("DATABASE_URL", "bob:secret@db.local:50001/demo")];
        let config = Config::from_lookup(lookup(&url));
        assert_eq!(config, Config::parse(url[0].1).unwrap());

        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "bob:secret@db.local:50001/demo"),
            ("MONETDB_USER", "alice"),
            ("MONETDB_PORT", "50002"),
        ]));
        assert_eq!(config.user(), "alice");
        assert_eq!(config.password(), "secret");
        assert_eq!(config.host(), "db.local");
        assert_eq!(config.port(), 50002);
        assert_eq!(config.database(), "demo");

        let config = Config::from_lookup(lookup(&[("MONETDB_PORT", "port")]));
        assert_eq!(config.port(), 50000);
    }
}
