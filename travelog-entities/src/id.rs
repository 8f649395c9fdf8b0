use std::{fmt, num::ParseIntError, str::FromStr};

pub type IdValue = i64;

/// Declares a server-assigned, numeric identifier.
///
/// All identifiers are backed by the SQLite `rowid` of
/// the corresponding table and are therefore never reused.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(IdValue);

        impl $name {
            pub const fn new(value: IdValue) -> Self {
                Self(value)
            }

            pub const fn value(self) -> IdValue {
                self.0
            }

            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }
        }

        impl From<IdValue> for $name {
            fn from(from: IdValue) -> Self {
                Self(from)
            }
        }

        impl From<$name> for IdValue {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifies a travelogue
    TravelId
);
numeric_id!(UserId);
numeric_id!(AdminId);
numeric_id!(ImageId);
numeric_id!(ReviewId);
numeric_id!(MessageId);
