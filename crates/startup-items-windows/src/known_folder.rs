use std::path::PathBuf;

use windows::Win32::System::Com::CoTaskMemFree;
use windows::Win32::UI::Shell::{FOLDERID_Startup, KF_FLAG_DEFAULT, SHGetKnownFolderPath};

/// Returns the current user's Start Menu Startup folder.
pub fn startup_folder() -> Result<PathBuf, String> {
    // SAFETY: SHGetKnownFolderPath allocates the returned string with the
    // COM allocator; it is freed below once copied.
    let raw = unsafe { SHGetKnownFolderPath(&FOLDERID_Startup, KF_FLAG_DEFAULT, None) }
        .map_err(|e| format!("could not locate the Startup folder: {e}"))?;
    // SAFETY: `raw` is a valid NUL-terminated string returned by the shell.
    let path = unsafe { raw.to_string() };
    unsafe { CoTaskMemFree(Some(raw.0 as *const _)) };
    path.map(PathBuf::from)
        .map_err(|e| format!("Startup folder path is not valid UTF-16: {e}"))
}
