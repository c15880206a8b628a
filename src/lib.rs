//! Veritas — client SDK for the news fact-checking backend.
//!
//! Owns the OAuth session lifecycle (redirect login, callback exchange,
//! startup hydration, logout), a bearer-injecting HTTP gateway with central
//! 401 handling, a pure route-guard decision function, and typed news
//! endpoints.
//!
//! # Quick Start
//!
//! ```no_run
//! use veritas::prelude::*;
//!
//! # async fn example() -> veritas::error::Result<()> {
//! let config = VeritasConfig::new("https://api.example.com");
//! let session = SessionManager::new(config)?;
//!
//! match session.initialize().await {
//!     SessionState::Authenticated { user, .. } => println!("welcome back, {}", user.name),
//!     _ => {
//!         let Navigation::External(auth_url) = session.login().await? else {
//!             unreachable!()
//!         };
//!         println!("open {auth_url} to sign in");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod news;
pub mod prelude;
pub mod session;
pub mod types;
pub mod util;
