//! Stored login session
//!
//! The login screen writes `session.toml` into the config directory after a
//! successful sign-in. On the next start the splash screen reads it back:
//!
//! ```toml
//! token = "..."
//! expires_at = "2026-11-01T12:00:00Z"
//! ```

use crate::error::AuthCheckFailed;
use crate::provider::AuthProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use guardian_splash_config::SplashConfig;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persisted login session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// A session is valid when it carries a token and has not expired yet
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.trim().is_empty() && self.expires_at > now
    }

    /// Save session to specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }
}

/// Where the session file lives
#[derive(Debug, Clone)]
enum SessionLocation {
    Fixed(PathBuf),
    /// Looked up on every check, so a missing config dir is a failed check
    /// rather than a startup error
    Resolve(fn() -> Result<PathBuf>),
}

/// Provider that checks the stored session file
#[derive(Debug, Clone)]
pub struct SessionFileAuthProvider {
    location: SessionLocation,
}

impl SessionFileAuthProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            location: SessionLocation::Fixed(path.into()),
        }
    }

    /// Find the session file with `resolve` each time a check runs
    pub fn with_resolver(resolve: fn() -> Result<PathBuf>) -> Self {
        Self {
            location: SessionLocation::Resolve(resolve),
        }
    }

    /// Use the configured session file, or the default one in the config dir
    pub fn from_config(config: &SplashConfig) -> Self {
        match &config.session_file {
            Some(path) => Self::new(path.clone()),
            None => Self::with_resolver(guardian_splash_config::session_path),
        }
    }

    /// Fixed path, if one was given up front
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            SessionLocation::Fixed(path) => Some(path),
            SessionLocation::Resolve(_) => None,
        }
    }

    fn resolve_path(&self) -> Result<PathBuf, AuthCheckFailed> {
        match &self.location {
            SessionLocation::Fixed(path) => Ok(path.clone()),
            SessionLocation::Resolve(resolve) => resolve().map_err(|e| {
                AuthCheckFailed::Unavailable(format!("session file location: {:#}", e))
            }),
        }
    }
}

#[async_trait]
impl AuthProvider for SessionFileAuthProvider {
    async fn check_auth_status(&self) -> Result<bool, AuthCheckFailed> {
        let path = self.resolve_path()?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No stored session at {:?}", path);
                return Ok(false);
            }
            Err(e) => {
                return Err(AuthCheckFailed::Unavailable(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let session: Session =
            toml::from_str(&content).map_err(|e| AuthCheckFailed::Malformed(e.to_string()))?;

        let valid = session.is_valid_at(Utc::now());
        if !valid {
            log::info!("Stored session expired at {}", session.expires_at);
        }
        Ok(valid)
    }
}
