//! Type integration with external types
//!
//! Conversion between [`Date`][d], [`Time`][t], [`Timestamp`][ts] and their
//! [`time`][::time] crate counterpart, and [`serde`] support.
//!
//! Available for:
//!
//! - [`time`][::time]'s [`Date`][td], [`Time`][tt], [`PrimitiveDateTime`][tp], and [`OffsetDateTime`][to]
//! - [`serde`][::serde]'s [`Serialize`][ss], requires `serde` feature
//!
//! [d]: crate::Date
//! [t]: crate::Time
//! [ts]: crate::Timestamp
//! [td]: ::time::Date
//! [tt]: ::time::Time
//! [tp]: ::time::PrimitiveDateTime
//! [to]: ::time::OffsetDateTime
//! [ss]: ::serde::Serialize

mod time;

#[cfg(feature = "serde")]
mod serde;
