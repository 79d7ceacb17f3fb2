//! Token entities: the signed header/payload segments and refresh-token records.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Signing algorithm identifier placed in every header
pub const ALG_HS256: &str = "HS256";

/// Token type tag placed in every header
pub const TYP_JWT: &str = "JWT";

pub use token_shared::config::auth::{
    DEFAULT_ACCESS_TOKEN_EXPIRY as DEFAULT_ACCESS_TOKEN_TTL_SECONDS, DEFAULT_DISPLAY_NAME,
};

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// First token segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alg: String,

    /// Token type
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub typ: String,
}

impl Header {
    /// The one header every token carries: HS256 / JWT
    pub fn hs256() -> Self {
        Self {
            alg: ALG_HS256.to_string(),
            typ: TYP_JWT.to_string(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs256()
    }
}

/// Second token segment carrying the claims
///
/// Empty strings and zero timestamps are left out of the encoded form, so a
/// payload with `name: ""` and one that never set a name are indistinguishable
/// on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Subject (caller-authenticated identifier)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String,

    /// Display label
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Issued at, seconds since epoch
    #[serde(default, skip_serializing_if = "is_zero")]
    pub iat: i64,

    /// Expiration, seconds since epoch
    #[serde(default, skip_serializing_if = "is_zero")]
    pub exp: i64,
}

impl Payload {
    /// Creates claims issued at `now` that expire `ttl_seconds` later
    ///
    /// The expiry saturates at the `i64` bounds instead of wrapping.
    pub fn new(sub: impl Into<String>, name: impl Into<String>, ttl_seconds: i64, now: i64) -> Self {
        Self {
            sub: sub.into(),
            name: name.into(),
            iat: now,
            exp: now.saturating_add(ttl_seconds),
        }
    }

    /// Same as [`Payload::new`] with the current wall-clock time
    pub fn issued_now(sub: impl Into<String>, name: impl Into<String>, ttl_seconds: i64) -> Self {
        Self::new(sub, name, ttl_seconds, Utc::now().timestamp())
    }

    /// Expired strictly before `now`; a token expiring exactly at `now` is still live
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }
}

/// Refresh token registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// The opaque refresh token itself (also the table key)
    pub token: String,

    /// Subject this token renews access for
    pub user_id: String,

    /// Expiry, unix seconds
    pub expires_at: i64,
}

impl RefreshTokenRecord {
    /// Creates a record expiring `ttl_seconds` after `now`, saturating at the `i64` bounds
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, ttl_seconds: i64, now: i64) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            expires_at: now.saturating_add(ttl_seconds),
        }
    }

    /// Checks if the record has expired as of `now`
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at < now
    }

    /// Expiry as a UTC timestamp, if representable
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at, 0).single()
    }
}
