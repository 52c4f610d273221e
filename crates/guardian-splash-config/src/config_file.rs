use std::{env, path::Path, path::PathBuf};

const CONFIG_FILE: &str = ".guardian-splash.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for .guardian-splash.toml in:
/// 1. Current working directory
/// 2. Home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_config_in(Path::new(".")) {
        return Some(content);
    }

    get_home_config_path().and_then(|home| {
        std::fs::read_to_string(&home)
            .inspect(|_| log::debug!("Loaded config from {}", home.display()))
            .ok()
    })
}

/// Read the config file from a specific directory, if present
pub fn read_config_in(dir: &Path) -> Option<String> {
    let path = dir.join(CONFIG_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}

fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
