pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod store;

pub use r#trait::RefreshTokenRepository;
pub use store::{generate_refresh_token, RefreshTokenStore, REFRESH_TOKEN_BYTES};

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockRefreshTokenRepository;
