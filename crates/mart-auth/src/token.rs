//! Session token value object.

use crate::AuthError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use mart_commerce::ids::UserId;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Prefix on every issued token string.
const TOKEN_PREFIX: &str = "tok_";

/// A login session token with an explicit expiry.
///
/// Expiry is a timestamp on the value itself, checked by a pure predicate;
/// there is no hidden global flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The opaque token string.
    pub token: String,
    /// User the token belongs to.
    pub user_id: UserId,
    /// Unix timestamp of issuance.
    pub created_at: i64,
    /// Unix timestamp when the token stops being valid.
    pub expires_at: i64,
    /// Whether this was issued through "remember me".
    pub remember_me: bool,
}

impl SessionToken {
    /// Default session lifetime: 7 days.
    pub const DEFAULT_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

    /// Remember-me session lifetime: 30 days.
    pub const REMEMBER_ME_DURATION_SECS: i64 = 30 * 24 * 60 * 60;

    /// Issue a token for a user at `now`.
    pub fn issue(user_id: UserId, remember_me: bool, now: i64) -> Self {
        let duration = if remember_me {
            Self::REMEMBER_ME_DURATION_SECS
        } else {
            Self::DEFAULT_DURATION_SECS
        };
        Self {
            token: generate_token_string(),
            user_id,
            created_at: now,
            expires_at: now + duration,
            remember_me,
        }
    }

    /// Whether the token is valid at `now`.
    pub fn is_valid(&self, now: i64) -> bool {
        self.is_well_formed() && now < self.expires_at
    }

    /// Validate the token at `now`, distinguishing the failure mode.
    pub fn validate(&self, now: i64) -> Result<(), AuthError> {
        if !self.is_well_formed() {
            return Err(AuthError::TokenMalformed);
        }
        if now >= self.expires_at {
            return Err(AuthError::TokenExpired);
        }
        Ok(())
    }

    /// Seconds of validity remaining at `now` (zero once expired).
    pub fn remaining_secs(&self, now: i64) -> i64 {
        (self.expires_at - now).max(0)
    }

    fn is_well_formed(&self) -> bool {
        self.token.starts_with(TOKEN_PREFIX) && self.token.len() > TOKEN_PREFIX.len()
    }
}

/// Generate a random URL-safe token string.
fn generate_token_string() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{}{}", TOKEN_PREFIX, URL_SAFE_NO_PAD.encode(bytes))
}
