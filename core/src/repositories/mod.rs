//! Persisted token stores and the table abstraction they sit on.

pub mod refresh_token;
pub mod revocation;
pub mod table;

pub use refresh_token::{RefreshTokenRepository, RefreshTokenStore};
pub use revocation::{RevocationRepository, RevocationStore};
pub use table::{KeyValueTable, MemoryTable};

#[cfg(test)]
pub use refresh_token::MockRefreshTokenRepository;
#[cfg(test)]
pub use revocation::MockRevocationRepository;

/// Short prefix of a token for log lines; full tokens are bearer secrets
pub(crate) fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{prefix}…")
}
