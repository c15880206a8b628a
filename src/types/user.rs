//! User profile payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile returned by the backend after authentication.
///
/// Opaque to the client: never mutated locally, only replaced wholesale on
/// successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub google_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
