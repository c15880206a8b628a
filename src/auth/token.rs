//! Bearer token payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer token persisted between sessions.
///
/// The token is opaque to the client; it is read back verbatim and attached
/// to authenticated requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            saved_at: Some(Utc::now()),
        }
    }
}
