//! Single outbound request pipeline for all backend calls.
//!
//! Every request goes through [`Gateway::dispatch`]: the bearer token is
//! re-read per request, success bodies unwrap straight to the caller's
//! payload type, and a 401 from any call funnels into the session core's
//! exactly-once invalidation.

pub mod endpoints;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::VeritasConfig;
use crate::error::{Result, VeritasError};
use crate::session::core::SessionCore;

/// HTTP gateway bound to one backend and one session core.
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    core: Arc<SessionCore>,
}

impl Gateway {
    pub fn new(config: &VeritasConfig, core: Arc<SessionCore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            timeout: config.timeout(),
            core,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(Method::GET, path, &[], None).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.dispatch(Method::GET, path, query, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::POST, path, &[], Some(body)).await
    }

    /// POST with no request body (e.g. the logout notification).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(Method::POST, path, &[], None).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        // Token is re-read on every dispatch; absence means no header at all.
        if let Some(token) = self.core.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        debug!(%method, %url, "dispatching request");
        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                VeritasError::Timeout(self.timeout.as_millis() as u64)
            } else {
                VeritasError::Transport(err)
            }
        })?;

        let status = response.status();
        let raw = response.text().await.map_err(VeritasError::Transport)?;

        if status == StatusCode::UNAUTHORIZED {
            // Central 401 handling: drop the session exactly once and signal
            // the forced redirect to login. The failed request is not retried.
            let message = extract_error_message(&raw);
            if self.core.invalidate() {
                warn!(%url, "unauthorized response, session invalidated");
            }
            return Err(VeritasError::Unauthorized(message));
        }

        if !status.is_success() {
            return Err(VeritasError::api(status.as_u16(), extract_error_message(&raw)));
        }

        serde_json::from_str(&raw).map_err(|err| {
            VeritasError::Validation(format!("malformed response from {path}: {err}"))
        })
    }
}

/// Pull the `error` field out of the backend's error envelope, falling back
/// to the raw body.
fn extract_error_message(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| raw.trim().to_string())
}
