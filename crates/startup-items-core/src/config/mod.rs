mod loader;
pub mod template;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Default registry location of the per-user Run key, relative to HKCU.
pub const DEFAULT_RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

/// Top-level configuration for Startup Items.
///
/// Loaded from `~/.config/startup-items/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry Run key settings.
    pub run: RunConfig,
    /// Startup folder settings.
    pub startup: StartupConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Registry Run key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Subkey of `HKEY_CURRENT_USER` holding the startup values.
    pub key: String,
}

/// Startup folder settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Folder to manage instead of the user's Startup known folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,
    /// Only delete `.lnk` files when rewriting the folder.
    pub keep_unmanaged_files: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_RUN_KEY.into(),
        }
    }
}

impl Config {
    /// Normalises values that would otherwise misbehave.
    ///
    /// A blank Run key falls back to the default, surrounding backslashes
    /// are stripped, an empty folder override is dropped, and the log size
    /// is clamped to 1..=100 MB.
    pub fn validate(&mut self) {
        let key = self.run.key.trim().trim_matches('\\');
        self.run.key = if key.is_empty() {
            DEFAULT_RUN_KEY.into()
        } else {
            key.into()
        };
        if self
            .startup
            .folder
            .as_ref()
            .is_some_and(|f| f.as_os_str().is_empty())
        {
            self.startup.folder = None;
        }
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}

#[cfg(test)]
mod tests;
