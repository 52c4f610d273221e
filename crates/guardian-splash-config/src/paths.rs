//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/guardian/`, `~/.cache/guardian/`
//! - macOS: `~/Library/Application Support/guardian/`, `~/Library/Caches/guardian/`
//! - Windows: `%APPDATA%\guardian\`, `%LOCALAPPDATA%\guardian\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "guardian";
const SESSION_FILE: &str = "session.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    ensure_dir(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    ensure_dir(base.join(APP_NAME))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create {:?}", dir))?;
    Ok(dir)
}

/// Get path to the stored login session
pub fn session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SESSION_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_path() {
        if let Ok(path) = session_path() {
            assert!(path.ends_with(SESSION_FILE));
            assert!(path.parent().unwrap().ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_ensure_dir_names_the_failing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = ensure_dir(blocker.join(APP_NAME)).unwrap_err();
        assert!(format!("{}", err).starts_with("Failed to create"));
        assert!(format!("{}", err).contains("not-a-dir"));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ensure_dir(tmp.path().join("a").join(APP_NAME)).unwrap();
        assert!(dir.is_dir());
    }
}
