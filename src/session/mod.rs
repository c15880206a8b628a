//! Client-side authentication session lifecycle.
//!
//! Owns token acquisition (OAuth redirect flow), startup hydration,
//! persistence, and logout. Navigation is expressed as intents the embedder
//! acts on; the manager never drives a navigation stack itself.

pub mod core;
pub mod state;

pub use state::{Navigation, SessionState};

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use self::core::SessionCore;
use crate::auth::Token;
use crate::config::VeritasConfig;
use crate::error::{Result, VeritasError};
use crate::gateway::{endpoints, Gateway};
use crate::types::UserProfile;
use crate::util::with_timeout;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    auth_url: String,
}

#[derive(Debug, Deserialize)]
struct CallbackResponse {
    token: String,
    user: UserProfile,
}

/// Per-code exchange registry.
///
/// Replaces lifecycle-flag re-entrancy guards: the authorization code is the
/// operation identity, so duplicate invocations (e.g. a doubled effect
/// firing) can be detected regardless of which caller they come from.
#[derive(Default)]
struct ExchangeRegistry {
    pending: HashMap<String, watch::Receiver<bool>>,
    completed: HashSet<String>,
}

enum ExchangeRole {
    Lead(watch::Sender<bool>),
    Follower(watch::Receiver<bool>),
}

/// Session manager: the single mutator of session state and the persisted
/// token.
pub struct SessionManager {
    core: Arc<SessionCore>,
    gateway: Arc<Gateway>,
    exchanges: Mutex<ExchangeRegistry>,
    validation_bound: Duration,
}

impl SessionManager {
    pub fn new(config: VeritasConfig) -> Result<Self> {
        let core = Arc::new(SessionCore::new(config.token_store()));
        let gateway = Arc::new(Gateway::new(&config, Arc::clone(&core))?);
        Ok(Self {
            core,
            gateway,
            exchanges: Mutex::new(ExchangeRegistry::default()),
            // Outer bound on startup validation in case the HTTP timeout
            // never fires; initialize() must not stay loading forever.
            validation_bound: config.timeout() + Duration::from_secs(5),
        })
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.core.state()
    }

    /// Gateway bound to this session, for data services.
    pub fn gateway(&self) -> Arc<Gateway> {
        Arc::clone(&self.gateway)
    }

    /// Subscribe to forced navigations (401-driven redirects to login).
    pub fn navigations(&self) -> watch::Receiver<Option<Navigation>> {
        self.core.navigations()
    }

    /// Hydrate the session at startup.
    ///
    /// No persisted token means Anonymous without any network call. A
    /// persisted token is validated against the profile endpoint; any
    /// failure (transport, 401, malformed body) clears the token and lands
    /// Anonymous. Always terminates in a non-Initializing state.
    pub async fn initialize(&self) -> SessionState {
        let token = match self.core.store().load() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "failed to read persisted token at startup, clearing it");
                if let Err(err) = self.core.store().clear() {
                    warn!(error = %err, "failed to clear unreadable token");
                }
                None
            }
        };
        let Some(token) = token else {
            self.core.set_anonymous();
            return self.core.state();
        };

        let validation = with_timeout(
            self.validation_bound,
            self.gateway.get::<UserProfile>(endpoints::AUTH_ME),
        )
        .await;
        match validation {
            Ok(user) => {
                debug!(user = %user.id, "persisted token validated");
                self.core.set_authenticated(token, user);
            }
            Err(err) => {
                warn!(error = %err, "token validation failed, clearing persisted token");
                // A 401 already cleared the store via the gateway; clearing
                // again is a no-op.
                if let Err(err) = self.core.store().clear() {
                    warn!(error = %err, "failed to clear invalid token");
                }
                self.core.set_anonymous();
            }
        }
        self.core.state()
    }

    /// Begin a login: fetch the provider authorization URL.
    ///
    /// The returned intent is a full navigation away from the app; errors
    /// propagate so the caller can surface them.
    pub async fn login(&self) -> Result<Navigation> {
        let response: LoginResponse = self.gateway.get(endpoints::AUTH_LOGIN).await?;
        Ok(Navigation::External(response.auth_url))
    }

    /// Exchange a one-time authorization code for a token and profile.
    ///
    /// Idempotent-safe: the exchange endpoint is hit at most once per code.
    /// A duplicate call while the same code is in flight awaits the first
    /// exchange and reports its outcome; a code that already completed
    /// short-circuits to the dashboard intent.
    pub async fn complete_callback(&self, code: &str) -> Result<Navigation> {
        let role = {
            let mut registry = self.exchanges.lock().await;
            if registry.completed.contains(code) {
                return Ok(Navigation::Dashboard);
            }
            if let Some(rx) = registry.pending.get(code) {
                ExchangeRole::Follower(rx.clone())
            } else {
                let (tx, rx) = watch::channel(false);
                registry.pending.insert(code.to_string(), rx);
                ExchangeRole::Lead(tx)
            }
        };

        match role {
            ExchangeRole::Follower(mut rx) => {
                debug!("duplicate callback for in-flight code, awaiting first exchange");
                let _ = rx.wait_for(|done| *done).await;
                if self.core.state().is_authenticated() {
                    Ok(Navigation::Dashboard)
                } else {
                    Err(VeritasError::InvalidState(
                        "authorization code exchange failed".to_string(),
                    ))
                }
            }
            ExchangeRole::Lead(tx) => {
                let result = self.exchange(code).await;
                let mut registry = self.exchanges.lock().await;
                registry.pending.remove(code);
                if result.is_ok() {
                    registry.completed.insert(code.to_string());
                }
                drop(registry);
                let _ = tx.send(true);
                result
            }
        }
    }

    async fn exchange(&self, code: &str) -> Result<Navigation> {
        let response: CallbackResponse = self
            .gateway
            .get_with_query(endpoints::AUTH_CALLBACK, &[("code", code)])
            .await?;
        if response.token.is_empty() {
            return Err(VeritasError::Validation(
                "token exchange returned an empty token".to_string(),
            ));
        }
        let token = Token::new(response.token);
        self.core.store().save(&token)?;
        self.core.set_authenticated(token, response.user);
        Ok(Navigation::Dashboard)
    }

    /// End the session.
    ///
    /// The backend is notified best-effort (only while a token is held);
    /// local cleanup is unconditional and a backend failure never blocks it.
    pub async fn logout(&self) -> Result<Navigation> {
        if self.core.bearer_token().is_some() {
            if let Err(err) = self
                .gateway
                .post_empty::<serde_json::Value>(endpoints::AUTH_LOGOUT)
                .await
            {
                warn!(error = %err, "backend logout failed, continuing with local cleanup");
            }
        }
        self.core.set_anonymous();
        // Codes consumed during this session can never legitimately recur,
        // so the registry need not outlive it.
        self.exchanges.lock().await.completed.clear();
        self.core.store().clear()?;
        Ok(Navigation::Login)
    }
}
