//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a SellerId where a ListingId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declare a string-backed ID newtype.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// View the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

// Define all ID types
define_id!(CartItemId);
define_id!(SellerId);
define_id!(ListingId);
define_id!(BidId);
define_id!(UserId);

/// Generate a unique ID using timestamp and an atomic counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}-{:x}", timestamp as u64, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = SellerId::new("sel-123");
        assert_eq!(id.as_str(), "sel-123");
    }

    #[test]
    fn test_id_generation() {
        let id1 = BidId::generate();
        let id2 = BidId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_from_string() {
        let id: ListingId = "lst-456".into();
        assert_eq!(id.as_str(), "lst-456");
    }

    #[test]
    fn test_id_display() {
        let id = CartItemId::new("itm-789");
        assert_eq!(format!("{}", id), "itm-789");
    }
}
