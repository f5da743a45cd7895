//! Config loading, default paths and cookie store preparation.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::ShellError;

/// Directory name under the user config dir.
pub const APP_NAME: &str = "whiteboard-kiosk";

/// Directory name under the user data dir holding the cookie store.
const DATA_DIR_NAME: &str = "whiteboard-app";

const COOKIE_FILE: &str = "cookies.txt";

/// `$XDG_CONFIG_HOME/whiteboard-kiosk/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join("config.toml")
}

/// `$XDG_DATA_HOME/whiteboard-app/cookies.txt`.
pub fn default_cookie_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
        .join(COOKIE_FILE)
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the default location.
    Defaults,
}

/// A configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Log where the configuration came from. Call once a subscriber is
    /// installed.
    pub fn report(&self) {
        match &self.source {
            ConfigSource::File(path) => info!(path = %path.display(), "loaded config"),
            ConfigSource::Defaults => info!("no config file found, using defaults"),
        }
    }
}

/// Load configuration from the given path, or the default location.
///
/// A missing file at the default location yields the defaults; a missing
/// file that was asked for explicitly is an error.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ShellError> {
    let (config_path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_path(), false),
    };

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ShellError::Config(format!("failed to read config: {e}")))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ShellError::Config(format!("failed to parse config: {e}")))?;
        Ok(LoadedConfig {
            config,
            source: ConfigSource::File(config_path),
        })
    } else if explicit {
        Err(ShellError::Config(format!(
            "config file not found: {}",
            config_path.display()
        )))
    } else {
        Ok(LoadedConfig {
            config: Config::default(),
            source: ConfigSource::Defaults,
        })
    }
}

/// What [`prepare_cookie_store`] found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieStoreState {
    /// No store existed; an empty one was created.
    Created,
    /// An existing store was left untouched for the engine to reuse.
    Reused,
}

/// Make sure the cookie store file and its parent directory exist.
///
/// Existing stores are never truncated, so a signed-in session survives
/// restarts.
pub fn prepare_cookie_store(path: &Path) -> Result<CookieStoreState, ShellError> {
    let io_err = |source: std::io::Error| ShellError::CookieStore {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let state = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => CookieStoreState::Created,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                return Err(io_err(std::io::Error::new(
                    ErrorKind::InvalidInput,
                    "expected a file, found a directory",
                )));
            }
            CookieStoreState::Reused
        }
        Err(e) => return Err(io_err(e)),
    };

    info!(path = %path.display(), state = ?state, "cookie store ready");
    Ok(state)
}
