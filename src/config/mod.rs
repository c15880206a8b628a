//! Client configuration (code > env).

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::store::{FileTokenStore, TokenStore, TokenStoreConfig};
use crate::error::{Result, VeritasError};

/// Fixed request timeout applied uniformly to every backend call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the Veritas client.
///
/// The token store defaults to the file-backed store under `~/.veritas`;
/// tests inject an in-memory store instead.
#[derive(Clone)]
pub struct VeritasConfig {
    base_url: String,
    timeout: Duration,
    token_store: Arc<dyn TokenStore>,
}

impl fmt::Debug for VeritasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VeritasConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("token_store", &"..")
            .finish()
    }
}

impl VeritasConfig {
    /// Create a config pointing at the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            token_store: Arc::new(FileTokenStore::new_default()),
        }
    }

    /// Override the fixed request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a specific token store.
    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = store;
        self
    }

    /// Load from environment variables (`VERITAS_BASE_URL`,
    /// `VERITAS_TIMEOUT_SECS`, `VERITAS_TOKEN_DIR`).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let base_url = std::env::var("VERITAS_BASE_URL").map_err(|_| {
            VeritasError::Configuration("VERITAS_BASE_URL is not set".to_string())
        })?;
        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var("VERITAS_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                VeritasError::Configuration(format!(
                    "VERITAS_TIMEOUT_SECS must be an integer, got {raw:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(dir) = std::env::var("VERITAS_TOKEN_DIR") {
            config.token_store = Arc::new(FileTokenStore::new(TokenStoreConfig::new(
                PathBuf::from(dir),
            )));
        }

        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.token_store)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = VeritasConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn default_timeout_is_sixty_seconds() {
        let config = VeritasConfig::new("http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config =
            VeritasConfig::new("http://localhost:8080").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
