pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod store;

pub use r#trait::RevocationRepository;
pub use store::RevocationStore;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockRevocationRepository;
