//! Session state machine and navigation intents.

use crate::auth::Token;
use crate::types::UserProfile;

/// Authentication state of the client session.
///
/// `Authenticated` carries both the token and the profile, so the
/// token-and-user-present invariant holds by construction. `Initializing`
/// only exists while startup validation is in flight; `initialize()` always
/// lands in one of the other two states.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Initializing,
    Anonymous,
    Authenticated { token: Token, user: UserProfile },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    /// Current profile, if authenticated.
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Current bearer token, if authenticated.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Where the embedder should navigate after a session operation.
///
/// The session core never touches a navigation stack itself; operations
/// return (or broadcast) an intent and the caller acts on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// In-app route change to the login view.
    Login,
    /// In-app route change to the authenticated dashboard.
    Dashboard,
    /// Full navigation away from the app (the OAuth provider's URL).
    External(String),
}
