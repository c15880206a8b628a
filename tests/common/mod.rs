#![allow(dead_code)]

//! Shared test helpers: in-memory token store and backend payload builders.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::{Match, MockServer, Request};

use veritas::auth::{Token, TokenStore};
use veritas::config::VeritasConfig;
use veritas::error::VeritasError;
use veritas::session::SessionManager;

/// Single-entry token store backed by process memory.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<Token>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, access_token: &str) {
        *self.token.lock().expect("store lock poisoned") = Some(Token::new(access_token));
    }

    pub fn get(&self) -> Option<Token> {
        self.token.lock().expect("store lock poisoned").clone()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<Token>, VeritasError> {
        Ok(self.get())
    }

    fn save(&self, token: &Token) -> Result<(), VeritasError> {
        *self.token.lock().expect("store lock poisoned") = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), VeritasError> {
        *self.token.lock().expect("store lock poisoned") = None;
        Ok(())
    }
}

/// Matches only requests carrying no Authorization header at all.
pub struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Session manager wired to a mock backend and an in-memory store.
pub fn manager_for(server: &MockServer, store: Arc<InMemoryTokenStore>) -> SessionManager {
    let config = VeritasConfig::new(server.uri())
        .with_token_store(store)
        .with_timeout(Duration::from_secs(5));
    SessionManager::new(config).expect("session manager")
}

pub fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "google_id": format!("g-{id}"),
        "email": format!("{id}@example.com"),
        "name": format!("User {id}"),
        "picture": "https://example.com/avatar.png",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn news_json(id: &str, user_id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": user_id,
        "content": "Breaking: example headline",
        "status": status,
        "created_at": "2024-02-01T12:00:00Z",
        "updated_at": "2024-02-01T12:00:00Z"
    })
}
