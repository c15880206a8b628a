//! Bearer-token payload and persistent storage.

pub mod store;
pub mod token;

pub use store::{FileTokenStore, TokenStore, TokenStoreConfig};
pub use token::Token;
