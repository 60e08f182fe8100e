//! Strongly-typed names for domain entities
//!
//! Rooms and residents are identified by the exact text a person typed.
//! Names are compared byte-for-byte: "Dani", "dani" and "Dani " are three
//! different residents.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! define_name {
    ($name:ident, $what:literal) => {
        #[doc = concat!("Name of a ", $what)]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps the given text without normalising it
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Returns the underlying text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_name!(RoomName, "room");
define_name!(ResidentName, "resident");
define_name!(BillName, "bill");
