use windows::Win32::UI::Shell::{IsUserAnAdmin, ShellExecuteW};
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::PCWSTR;

use startup_items_core::Elevation;
use startup_items_core::elevation::command_line;

use crate::wide::to_wide;

/// Elevation backed by the shell: `IsUserAnAdmin` and the `runas` verb.
#[derive(Debug, Default)]
pub struct WindowsElevation;

impl Elevation for WindowsElevation {
    fn is_elevated(&self) -> bool {
        // SAFETY: IsUserAnAdmin takes no arguments and only inspects the
        // current process token.
        unsafe { IsUserAnAdmin().as_bool() }
    }

    fn relaunch_elevated(&self, args: &[String]) -> Result<(), String> {
        let exe = std::env::current_exe().map_err(|e| format!("could not resolve exe path: {e}"))?;
        let params = command_line(args);

        let verb = to_wide("runas");
        let wide_exe = to_wide(&exe.to_string_lossy());
        let wide_params = to_wide(&params);

        // SAFETY: every wide buffer outlives the call. ShellExecuteW shows
        // the UAC consent prompt and returns once the process is created or
        // the prompt is dismissed.
        let result = unsafe {
            ShellExecuteW(
                None,
                PCWSTR(verb.as_ptr()),
                PCWSTR(wide_exe.as_ptr()),
                if params.is_empty() {
                    PCWSTR::null()
                } else {
                    PCWSTR(wide_params.as_ptr())
                },
                PCWSTR::null(),
                SW_SHOWNORMAL,
            )
        };

        // Values of 32 or below are error codes.
        if result.0 as isize <= 32 {
            Err(format!("ShellExecuteW failed with code {}", result.0 as isize))
        } else {
            Ok(())
        }
    }
}
