//! Builds the application state from the loaded configuration.

use startup_items_core::AppState;
use startup_items_core::config::Config;

#[cfg(windows)]
use startup_items_core::{Elevation, StartupFolder};
#[cfg(windows)]
use startup_items_windows::{RegistryRunKey, ShellLinkCodec, WindowsElevation, known_folder};

#[cfg(not(windows))]
pub use unsupported::Unsupported;

#[cfg(windows)]
pub type App = AppState<RegistryRunKey, StartupFolder<ShellLinkCodec>>;
#[cfg(not(windows))]
pub type App = AppState<Unsupported, Unsupported>;

/// Returns the platform's elevation check.
#[cfg(windows)]
pub fn elevation() -> WindowsElevation {
    WindowsElevation
}

#[cfg(not(windows))]
pub fn elevation() -> Unsupported {
    Unsupported
}

/// Opens both stores and loads their entries.
///
/// Load failures of one list are printed as warnings; the other list is
/// still usable.
#[cfg(windows)]
pub fn open(config: &Config) -> Result<App, String> {
    let folder = match &config.startup.folder {
        Some(folder) => folder.clone(),
        None => known_folder::startup_folder()?,
    };
    let links = StartupFolder::new(folder, ShellLinkCodec)
        .keep_unmanaged_files(config.startup.keep_unmanaged_files);
    let run = RegistryRunKey::new(config.run.key.as_str());

    let mut app = AppState::new(run, links, elevation().is_elevated());
    for e in app.load_all() {
        eprintln!("Warning: {e}");
    }
    Ok(app)
}

#[cfg(not(windows))]
pub fn open(_config: &Config) -> Result<App, String> {
    Err(unsupported::MESSAGE.into())
}

#[cfg(not(windows))]
mod unsupported {
    use startup_items_core::{
        Elevation, LinkStore, RunEntry, RunStore, StartupLink, SyncError, SyncResult,
    };

    pub const MESSAGE: &str = "startup-items manages Windows startup entries and only runs on Windows";

    /// Stand-in store for platforms without a registry or shell links.
    pub struct Unsupported;

    fn unsupported<T>() -> SyncResult<T> {
        Err(SyncError::Store(MESSAGE.into()))
    }

    impl RunStore for Unsupported {
        fn read_values(&self) -> SyncResult<Option<Vec<RunEntry>>> {
            unsupported()
        }
        fn value_names(&self) -> SyncResult<Vec<String>> {
            unsupported()
        }
        fn delete_value(&mut self, _name: &str) -> SyncResult<()> {
            unsupported()
        }
        fn set_value(&mut self, _entry: &RunEntry) -> SyncResult<()> {
            unsupported()
        }
    }

    impl LinkStore for Unsupported {
        fn read_links(&self) -> SyncResult<Vec<StartupLink>> {
            unsupported()
        }
        fn clear(&mut self) -> SyncResult<()> {
            unsupported()
        }
        fn delete_link(&mut self, _name: &str) -> SyncResult<()> {
            unsupported()
        }
        fn write_link(&mut self, _link: &StartupLink) -> SyncResult<()> {
            unsupported()
        }
    }

    impl Elevation for Unsupported {
        fn is_elevated(&self) -> bool {
            false
        }
        fn relaunch_elevated(&self, _args: &[String]) -> Result<(), String> {
            Err(MESSAGE.into())
        }
    }
}
