//! Strongly-typed identifier types for the babybet domain.
//!
//! The upstream store hands out opaque string keys, so every identifier wraps a
//! `String` rather than a parsed UUID. Freshly minted identifiers use UUID v7 so
//! they sort by creation time like the rest of the stored rows.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{self, Display};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a new time-ordered identifier
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Borrow the raw key
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the raw key
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_string())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(UserId, "Unique identifier for users (participants and game owners)");

define_id!(GameId, "Unique identifier for prediction games");

define_id!(
    QuestionId,
    "Unique identifier for questions; actual results are keyed by it"
);

define_id!(BetId, "Unique identifier for a single stored prediction row");
