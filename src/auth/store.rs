use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::token::Token;
use crate::error::VeritasError;

const TOKEN_FILE_NAME: &str = "session.toml";

/// Storage abstraction for the persisted session token.
///
/// The session manager is the only writer; the gateway re-reads the token
/// per request so it never holds a stale copy after rotation.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<Token>, VeritasError>;
    fn save(&self, token: &Token) -> Result<(), VeritasError>;
    fn clear(&self) -> Result<(), VeritasError>;
}

/// Configuration for file-backed token storage.
#[derive(Debug, Clone)]
pub struct TokenStoreConfig {
    pub base_dir: PathBuf,
}

impl TokenStoreConfig {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn default_dir() -> PathBuf {
        default_veritas_dir()
    }
}

/// File-backed token store holding a single `session.toml` entry.
///
/// An absent file means no session; the next startup lands Anonymous.
///
/// # Example
/// ```no_run
/// use veritas::auth::{FileTokenStore, Token, TokenStore};
///
/// let store = FileTokenStore::new_default();
/// store.save(&Token::new("bearer-token"))?;
/// # Ok::<(), veritas::error::VeritasError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    base_dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(config: TokenStoreConfig) -> Self {
        Self {
            base_dir: config.base_dir,
        }
    }

    pub fn new_default() -> Self {
        Self {
            base_dir: default_veritas_dir(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE_NAME)
    }

    fn ensure_parent(path: &Path) -> Result<(), VeritasError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<Token>, VeritasError> {
        let path = self.token_path();
        let raw = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(VeritasError::Io(err)),
        };
        let file: TokenFile = toml::from_str(&raw)?;
        Ok(Some(file.token))
    }

    fn save(&self, token: &Token) -> Result<(), VeritasError> {
        let path = self.token_path();
        Self::ensure_parent(&path)?;
        let file = TokenFile {
            version: 1,
            token: token.clone(),
            saved_at: Utc::now(),
        };
        let serialized = toml::to_string(&file)?;
        fs::write(&path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), VeritasError> {
        let path = self.token_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(VeritasError::Io(err)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenFile {
    version: u32,
    token: Token,
    saved_at: DateTime<Utc>,
}

fn default_veritas_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".veritas"))
        .unwrap_or_else(|| PathBuf::from(".veritas"))
}
