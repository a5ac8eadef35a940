use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/startup-items/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("startup-items"))
}

/// Returns the config file path: `~/.config/startup-items/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(None)` when the file does not exist, or an error string
/// describing what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Option<Config>, String> {
    let path = config_path().ok_or("could not determine config path")?;
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content)
        .map(Some)
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults; unreadable or invalid files
/// print a warning first.
pub fn load() -> Config {
    match try_load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Parses and validates config file contents.
pub(super) fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}
