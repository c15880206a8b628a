//! Shared session core: state cell, token store, forced-navigation channel.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;
use tracing::{debug, warn};

use super::state::{Navigation, SessionState};
use crate::auth::store::TokenStore;
use crate::auth::Token;
use crate::types::UserProfile;

/// State shared between the session manager and the HTTP gateway.
///
/// The session manager is the only writer of the persisted token; the
/// gateway reads it per request and calls [`SessionCore::invalidate`] when
/// the backend answers 401.
pub struct SessionCore {
    state: RwLock<SessionState>,
    store: Arc<dyn TokenStore>,
    nav_tx: watch::Sender<Option<Navigation>>,
}

impl SessionCore {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let (nav_tx, _nav_rx) = watch::channel(None);
        Self {
            state: RwLock::new(SessionState::Initializing),
            store,
            nav_tx,
        }
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state.read().expect("session state lock poisoned").clone()
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Subscribe to forced navigations (401-driven redirects to login).
    pub fn navigations(&self) -> watch::Receiver<Option<Navigation>> {
        self.nav_tx.subscribe()
    }

    /// Bearer token attached to the next outgoing request, if any.
    ///
    /// Re-read from the store on every call so a rotated token is picked up
    /// immediately. An empty token is treated as absent so the gateway never
    /// sends a malformed Authorization header.
    pub fn bearer_token(&self) -> Option<String> {
        match self.store.load() {
            Ok(Some(token)) if !token.access_token.is_empty() => Some(token.access_token),
            Ok(_) => None,
            Err(err) => {
                debug!(error = %err, "failed to read persisted token");
                None
            }
        }
    }

    pub(crate) fn set_anonymous(&self) {
        *self.state.write().expect("session state lock poisoned") = SessionState::Anonymous;
    }

    pub(crate) fn set_authenticated(&self, token: Token, user: UserProfile) {
        *self.state.write().expect("session state lock poisoned") =
            SessionState::Authenticated { token, user };
    }

    /// Drop the session after an observed 401.
    ///
    /// Idempotent: concurrent 401s collapse to a single Anonymous transition
    /// and a single forced navigation to login. Returns whether this call
    /// performed the transition.
    pub fn invalidate(&self) -> bool {
        {
            let mut state = self.state.write().expect("session state lock poisoned");
            if matches!(*state, SessionState::Anonymous) {
                return false;
            }
            *state = SessionState::Anonymous;
        }
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear persisted token during invalidation");
        }
        let _ = self.nav_tx.send(Some(Navigation::Login));
        true
    }
}
