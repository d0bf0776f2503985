//! Persisted login for the command-line front end.
//!
//! File location: `<config_dir>/session.json`
//!
//! Only the bearer token and the email it belongs to are stored. The
//! identity itself is always fetched fresh from the backend on resume, so
//! a stale plan or usage counter never outlives the process that saw it.

use crate::{ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = "session.json";

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionFile {
    pub token: String,
    pub email: String,
    /// RFC 3339 timestamp of the login that produced the token
    pub saved_at: String,
}

impl std::fmt::Debug for SessionFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionFile")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .field("saved_at", &self.saved_at)
            .finish()
    }
}

impl SessionFile {
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Write into `dir` (normally [`Config::config_dir`](crate::Config::config_dir)).
    pub fn write_to(&self, dir: &Path) -> ConfigErrorResult<PathBuf> {
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let path = dir.join(SESSION_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::session(format!("Failed to serialize session: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Self::restrict_permissions(&path)?;

        log::debug!("Session saved to {}", path.display());
        Ok(path)
    }

    /// Read from `dir`. `None` if no session is saved.
    pub fn read_from(dir: &Path) -> ConfigErrorResult<Option<Self>> {
        let path = dir.join(SESSION_FILENAME);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let session = serde_json::from_str(&content).map_err(|e| {
            ConfigError::session(format!("Corrupt session file {}: {e}", path.display()))
        })?;

        Ok(Some(session))
    }

    /// Delete the session from `dir`.
    /// Returns whether a file was removed.
    pub fn remove_from(dir: &Path) -> ConfigErrorResult<bool> {
        let path = dir.join(SESSION_FILENAME);
        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(true)
    }

    #[cfg(unix)]
    fn restrict_permissions(path: &Path) -> ConfigErrorResult<()> {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        })
    }

    #[cfg(not(unix))]
    fn restrict_permissions(_path: &Path) -> ConfigErrorResult<()> {
        Ok(())
    }
}
