//! Session and remember-me tokens for UniMart.
//!
//! Replaces ad hoc "is there a string in storage" checks with an explicit
//! token value object carrying its own expiry, validated by a pure
//! `is_valid(now)` predicate. Storage and transport of the token are the
//! surrounding application's concern.

pub mod error;
pub mod token;

pub use error::AuthError;
pub use token::SessionToken;
