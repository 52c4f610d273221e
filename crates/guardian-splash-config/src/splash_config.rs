//! Splash configuration
//!
//! Configuration loaded from .guardian-splash.toml file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::{HOME_ROUTE, LOGIN_ROUTE, SPLASH_ROUTE};

/// Splash configuration loaded from .guardian-splash.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SplashConfig {
    /// Upper bound for the authentication check in milliseconds.
    /// Unset means the splash waits until the provider answers.
    #[serde(default)]
    pub auth_timeout_ms: Option<u64>,

    /// Interval between animation frames in milliseconds
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Route of the splash screen, removed from history on navigation
    #[serde(default = "default_splash_route")]
    pub splash_route: String,

    /// Route opened for an authenticated user
    #[serde(default = "default_home_route")]
    pub home_route: String,

    /// Route opened when no valid session exists
    #[serde(default = "default_login_route")]
    pub login_route: String,

    /// Override for the stored session file (defaults to the config dir)
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

fn default_frame_interval_ms() -> u64 {
    16 // ~60 fps
}

fn default_splash_route() -> String {
    SPLASH_ROUTE.to_string()
}

fn default_home_route() -> String {
    HOME_ROUTE.to_string()
}

fn default_login_route() -> String {
    LOGIN_ROUTE.to_string()
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            auth_timeout_ms: None,
            frame_interval_ms: default_frame_interval_ms(),
            splash_route: default_splash_route(),
            home_route: default_home_route(),
            login_route: default_login_route(),
            session_file: None,
        }
    }
}

impl SplashConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::from_toml_or_default(&content),
            None => {
                log::debug!("Using default splash config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults on malformed input
    pub fn from_toml_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded splash config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    pub fn auth_timeout(&self) -> Option<Duration> {
        self.auth_timeout_ms.map(Duration::from_millis)
    }

    /// Frame interval, never zero
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SplashConfig::default();
        assert_eq!(config.auth_timeout(), None);
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.splash_route, "splash");
        assert_eq!(config.home_route, "home");
        assert_eq!(config.login_route, "login");
        assert!(config.session_file.is_none());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            auth_timeout_ms = 3000
            login_route = "sign-in"
        "#;
        let config: SplashConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.auth_timeout(), Some(Duration::from_millis(3000)));
        assert_eq!(config.login_route, "sign-in");
        // Other fields should use defaults
        assert_eq!(config.home_route, "home");
        assert_eq!(config.frame_interval_ms, 16);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = SplashConfig::from_toml_or_default("auth_timeout_ms = \"soon\"");
        assert_eq!(config, SplashConfig::default());
    }

    #[test]
    fn test_zero_frame_interval_is_clamped() {
        let config = SplashConfig::from_toml_or_default("frame_interval_ms = 0");
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }
}
