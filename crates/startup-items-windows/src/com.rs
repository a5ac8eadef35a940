use windows::Win32::System::Com::{COINIT_APARTMENTTHREADED, CoInitializeEx, CoUninitialize};

/// Keeps COM initialised for the lifetime of the calling thread.
struct ComInit;

impl ComInit {
    fn new() -> Self {
        // SAFETY: CoInitializeEx is safe to call; duplicate calls on the
        // same thread return S_FALSE and are harmless.
        unsafe {
            let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED);
        }
        Self
    }
}

impl Drop for ComInit {
    fn drop(&mut self) {
        unsafe {
            CoUninitialize();
        }
    }
}

thread_local! {
    static COM_INIT: ComInit = ComInit::new();
}

/// Initialises COM on the current thread if it has not been already.
pub fn ensure_initialized() {
    COM_INIT.with(|_| {});
}
