//! MonetDB Text Value Codec
//!
//! Convert column text received from MonetDB into typed [`Value`], and
//! [`Value`] back into literal to be embedded in query text.
//!
//! # Examples
//!
//! Decoding a row:
//!
//! ```
//! use monet::{TypeTag, Value};
//!
//! # fn app() -> monet::Result<()> {
//! let tags = ["int", "varchar", "boolean"]
//!     .map(TypeTag::parse)
//!     .into_iter()
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let row = monet::decode_row(&["420", r"'it\'s'", "NULL"], &tags)?;
//!
//! assert_eq!(row[0], Value::Int32(420));
//! assert_eq!(row[1].as_str(), Some("it's"));
//! assert!(row[2].is_null());
//! # Ok(())
//! # }
//! # app().unwrap();
//! ```
//!
//! Encoding parameters:
//!
//! ```
//! use monet::Encode;
//!
//! # fn app() -> monet::Result<()> {
//! let sql = format!(
//!     "INSERT INTO foo VALUES ({}, {}, {})",
//!     420i32.encode()?,
//!     "it's".encode()?,
//!     None::<bool>.encode()?,
//! );
//!
//! assert_eq!(sql, r"INSERT INTO foo VALUES (420, 'it\'s', NULL)");
//! # Ok(())
//! # }
//! # app().unwrap();
//! ```

mod common;
mod ext;

// Vocabulary
mod tag;
mod value;
pub mod types;

// Codec
pub mod escape;
pub mod temporal;
pub mod decode;
pub mod encode;

// Connection
pub mod config;

mod error;


pub use tag::TypeTag;
pub use value::{Date, Time, Timestamp, Value};
pub use decode::{DecodeError, decode, decode_as, decode_row};
pub use encode::{Encode, EncodeError, encode, encode_any};
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
