//! News submission and verification payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verification status assigned by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    /// Submitted but not yet verified.
    Pending,
    /// Verified as accurate.
    True,
    /// Verified as inaccurate.
    False,
    /// The verifier could not reach a conclusion.
    Uncertain,
    /// Forward-compatible catch-all for statuses this client predates.
    #[serde(other)]
    Unknown,
}

/// A news item as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct News {
    pub id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub status: NewsStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for submitting a news item for verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSubmission {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl NewsSubmission {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: None,
            photo_url: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }
}

/// Verdict returned by the verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsVerification {
    pub id: String,
    pub status: NewsStatus,
    pub explanation: String,
}

/// Page of a user's submissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserNewsPage {
    pub news: Vec<News>,
    pub count: usize,
}
