/// Conversion of raw registry value data to display strings.
pub mod value;

/// COM apartment initialisation.
#[cfg(windows)]
mod com;

/// Administrator check and `runas` relaunch.
#[cfg(windows)]
pub mod elevation;

/// Startup known-folder lookup.
#[cfg(windows)]
pub mod known_folder;

/// `RunStore` over an `HKEY_CURRENT_USER` registry key.
#[cfg(windows)]
pub mod registry;

/// `ShortcutCodec` over the `IShellLinkW` COM object.
#[cfg(windows)]
pub mod shortcut;

#[cfg(windows)]
mod wide;

#[cfg(windows)]
pub use elevation::WindowsElevation;
#[cfg(windows)]
pub use registry::RegistryRunKey;
#[cfg(windows)]
pub use shortcut::ShellLinkCodec;
