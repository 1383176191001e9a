pub mod config;

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "CHOREBOARD_HOME";

/// Data directory: `$CHOREBOARD_HOME`, else `~/.choreboard/`
pub fn choreboard_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".choreboard")
}

/// Ensure the data directory exists
pub fn ensure_dir() -> io::Result<PathBuf> {
    let dir = choreboard_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load and deserialize a TOML file
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> crate::error::Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Serialize data into a TOML file, creating parent directories
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> crate::error::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
