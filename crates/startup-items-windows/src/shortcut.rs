//! Shell link (`.lnk`) files through `IShellLinkW` / `IPersistFile`.

use std::path::Path;

use windows::Win32::Foundation::HWND;
use windows::Win32::System::Com::{CLSCTX_INPROC_SERVER, CoCreateInstance, IPersistFile, STGM_READ};
use windows::Win32::UI::Shell::{IShellLinkW, SLR_NO_UI, SLR_NOUPDATE, ShellLink};
use windows::core::{Interface, PCWSTR};

use startup_items_core::{ShortcutCodec, ShortcutData, SyncError, SyncResult, log_debug};

use crate::com;
use crate::wide::{from_wide, to_wide};

const MAX_TARGET: usize = 1024;
const MAX_ARGUMENTS: usize = 32_768;

/// Reads and writes shortcut files with the shell's link object.
#[derive(Debug, Default)]
pub struct ShellLinkCodec;

impl ShellLinkCodec {
    fn create_link() -> SyncResult<IShellLinkW> {
        com::ensure_initialized();
        // SAFETY: CoCreateInstance with the ShellLink coclass; COM is
        // initialised on this thread above.
        unsafe { CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER) }
            .map_err(|e| SyncError::Store(format!("could not create shell link object: {e}")))
    }
}

impl ShortcutCodec for ShellLinkCodec {
    fn read(&self, path: &Path) -> SyncResult<ShortcutData> {
        let link = Self::create_link()?;
        let persist: IPersistFile = link.cast().map_err(|e| link_error(path, e))?;
        let wide_path = to_wide(&path.to_string_lossy());

        // SAFETY: the path buffer outlives the call.
        unsafe { persist.Load(PCWSTR(wide_path.as_ptr()), STGM_READ) }
            .map_err(|e| link_error(path, e))?;

        // Resolve without UI so a moved target is found when possible. A
        // target that cannot be found still leaves the stored path readable.
        let flags = (SLR_NO_UI.0 | SLR_NOUPDATE.0) as u32;
        if let Err(e) = unsafe { link.Resolve(HWND::default(), flags) } {
            log_debug!("could not resolve {}: {e}", path.display());
        }

        let mut target = vec![0u16; MAX_TARGET];
        // SAFETY: GetPath writes at most `target.len()` characters.
        unsafe { link.GetPath(&mut target, std::ptr::null_mut(), 0) }
            .map_err(|e| link_error(path, e))?;
        let target = from_wide(&target);
        if target.is_empty() {
            return Err(SyncError::Store(format!(
                "{} does not point at a file",
                path.display()
            )));
        }

        let mut arguments = vec![0u16; MAX_ARGUMENTS];
        // SAFETY: GetArguments writes at most `arguments.len()` characters.
        unsafe { link.GetArguments(&mut arguments) }.map_err(|e| link_error(path, e))?;

        Ok(ShortcutData {
            target,
            arguments: from_wide(&arguments),
        })
    }

    fn write(&self, path: &Path, target: &Path, arguments: &str) -> SyncResult<()> {
        let link = Self::create_link()?;
        let wide_target = to_wide(&target.to_string_lossy());
        let wide_arguments = to_wide(arguments);

        // SAFETY: every wide buffer outlives the call that reads it.
        unsafe {
            link.SetPath(PCWSTR(wide_target.as_ptr()))
                .map_err(|e| link_error(path, e))?;
            link.SetArguments(PCWSTR(wide_arguments.as_ptr()))
                .map_err(|e| link_error(path, e))?;
            if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
                let wide_dir = to_wide(&dir.to_string_lossy());
                let _ = link.SetWorkingDirectory(PCWSTR(wide_dir.as_ptr()));
            }
        }

        let persist: IPersistFile = link.cast().map_err(|e| link_error(path, e))?;
        let wide_path = to_wide(&path.to_string_lossy());
        // SAFETY: the path buffer outlives the call.
        unsafe { persist.Save(PCWSTR(wide_path.as_ptr()), true) }
            .map_err(|e| link_error(path, e))
    }
}

fn link_error(path: &Path, e: windows::core::Error) -> SyncError {
    SyncError::Store(format!("{}: {e}", path.display()))
}
