//! MonetDB column type vocabulary.
//!
//! <https://www.monetdb.org/documentation/user-guide/sql-manual/data-types/>
use std::fmt;

use crate::decode::DecodeError;

macro_rules! type_tag {
    ($(
        $(#[doc = $doc:literal])*
        $variant:ident => $name:literal $(| $alias:literal)*,
    )*) => {
        /// Wire level column type name.
        ///
        /// Aliases, full name spelling and legacy names, resolve to their
        /// canonical tag when parsed.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TypeTag {
            $(
                $(#[doc = $doc])*
                $variant,
            )*
        }

        impl TypeTag {
            /// All canonical tags.
            pub const ALL: &'static [TypeTag] = &[$(TypeTag::$variant),*];

            /// Resolve type name into its canonical tag.
            ///
            /// Full names may be spelled with either space or underscore.
            pub fn parse(name: &str) -> Result<TypeTag, DecodeError> {
                match name {
                    $($name $(| $alias)* => Ok(TypeTag::$variant),)*
                    _ => Err(DecodeError::UnsupportedType(name.into())),
                }
            }

            /// Returns the canonical type name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(TypeTag::$variant => $name,)*
                }
            }
        }
    };
}

type_tag! {
    /// `(L)` character string with length L
    Char => "char" | "character",
    /// `(L)` string with at most length L
    Varchar => "varchar" | "character_varying" | "character varying",
    Clob => "clob" | "character_large_object" | "character large object",
    Blob => "blob" | "binary_large_object" | "binary large object",
    /// `(P,S)` fixed point decimal
    Decimal => "decimal" | "numeric",
    /// 8 bit integer
    TinyInt => "tinyint",
    /// 16 bit integer
    SmallInt => "smallint" | "shortint",
    /// 32 bit integer
    Int => "int" | "mediumint" | "wrd",
    /// 64 bit integer
    BigInt => "bigint" | "longint",
    /// 128 bit integer, decoded at 64 bit width
    HugeInt => "hugeint",
    /// 64 bit integer sequence generator
    Serial => "serial",
    /// 32 bit floating point
    Real => "real" | "float",
    /// 64 bit floating point
    Double => "double" | "double_precision" | "double precision",
    Boolean => "boolean",
    Date => "date",
    /// `(T)` time of day
    Time => "time",
    /// `(T)` date concatenated with unique time
    Timestamp => "timestamp",
    Timestamptz => "timestamptz",
    /// `(Q)` a temporal interval
    Interval => "interval",
    MonthInterval => "month_interval",
    SecInterval => "sec_interval",
    Uuid => "uuid",
}

impl std::str::FromStr for TypeTag {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_name_roundtrip() {
        for &tag in TypeTag::ALL {
            assert_eq!(TypeTag::parse(tag.name()).unwrap(), tag);
        }
    }

    #[test]
    fn alias() {
        assert_eq!(TypeTag::parse("character").unwrap(), TypeTag::Char);
        assert_eq!(TypeTag::parse("character varying").unwrap(), TypeTag::Varchar);
        assert_eq!(TypeTag::parse("character_varying").unwrap(), TypeTag::Varchar);
        assert_eq!(TypeTag::parse("character_large_object").unwrap(), TypeTag::Clob);
        assert_eq!(TypeTag::parse("binary_large_object").unwrap(), TypeTag::Blob);
        assert_eq!(TypeTag::parse("numeric").unwrap(), TypeTag::Decimal);
        assert_eq!(TypeTag::parse("double_precision").unwrap(), TypeTag::Double);
        assert_eq!(TypeTag::parse("wrd").unwrap(), TypeTag::Int);
        assert_eq!(TypeTag::parse("float").unwrap(), TypeTag::Real);
        assert_eq!("longint".parse::<TypeTag>().unwrap(), TypeTag::BigInt);
    }

    #[test]
    fn unknown() {
        assert!(matches!(
            TypeTag::parse("geometry"),
            Err(DecodeError::UnsupportedType(name)) if name == "geometry"
        ));
        assert!(TypeTag::parse("INT").is_err());
        assert!(TypeTag::parse("").is_err());
    }
}
