//! Configuration and file management for the Guardian splash screen
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Splash configuration (SplashConfig)

pub mod config_file;
pub mod paths;
pub mod splash_config;

pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, session_path};
pub use splash_config::SplashConfig;

/// Route identifier of the splash screen itself
pub const SPLASH_ROUTE: &str = "splash";

/// Route identifier of the home screen
pub const HOME_ROUTE: &str = "home";

/// Route identifier of the login screen
pub const LOGIN_ROUTE: &str = "login";
