use startup_items_core::config;

/// Creates the default configuration file at `~/.config/startup-items/`.
///
/// An existing file is never overwritten.
pub fn execute() -> Result<(), String> {
    let dir = config::config_dir().ok_or("could not determine home directory")?;
    std::fs::create_dir_all(&dir).map_err(|e| format!("could not create {}: {e}", dir.display()))?;

    let path = dir.join("config.toml");
    if path.exists() {
        println!("Already exists: {}", path.display());
        return Ok(());
    }
    std::fs::write(&path, config::template::generate_config())
        .map_err(|e| format!("could not write {}: {e}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
