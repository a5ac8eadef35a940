use startup_items_core::config::{self, Config};

use super::context;

pub fn execute(config: &Config) -> Result<(), String> {
    let app = context::open(config)?;

    println!("{}", app.title());
    println!();
    let elevated = if app.is_elevated() { "yes" } else { "no" };
    println!("  Elevated        {elevated}");
    match config::config_path() {
        Some(path) if path.exists() => println!("  Config          {}", path.display()),
        Some(path) => println!("  Config          {} (not found, using defaults)", path.display()),
        None => println!("  Config          (no home directory, using defaults)"),
    }
    println!("  Run key         HKCU\\{}", config.run.key);
    println!("  Startup folder  {}", startup_folder(&app));
    println!("  Run entries     {}", app.run.entries().len());
    println!("  Startup links   {}", app.links.entries().len());
    Ok(())
}

#[cfg(windows)]
fn startup_folder(app: &context::App) -> String {
    app.links.store().path().display().to_string()
}

#[cfg(not(windows))]
fn startup_folder(_app: &context::App) -> String {
    String::from("(unavailable)")
}
