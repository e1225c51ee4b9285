//! Auth error types.

use thiserror::Error;

/// Errors that can occur validating a session token.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Token past its expiry timestamp.
    #[error("Session token has expired")]
    TokenExpired,

    /// Token value is empty or not in the expected shape.
    #[error("Session token is malformed")]
    TokenMalformed,
}
