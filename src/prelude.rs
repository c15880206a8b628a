//! Common imports for Veritas users.

pub use crate::auth::{FileTokenStore, Token, TokenStore, TokenStoreConfig};
pub use crate::config::VeritasConfig;
pub use crate::error::{Result, VeritasError};
pub use crate::guard::{decide, Route, RouteDecision};
pub use crate::news::NewsService;
pub use crate::session::{Navigation, SessionManager, SessionState};
pub use crate::types::{News, NewsStatus, NewsSubmission, NewsVerification, UserProfile};
