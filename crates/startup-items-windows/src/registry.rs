//! The per-user Run key as a [`RunStore`].
//!
//! Operates on a subkey of `HKEY_CURRENT_USER` (by default
//! `Software\Microsoft\Windows\CurrentVersion\Run`). No elevation is
//! required since HKCU is per-user.

use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS};
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_OPTION_NON_VOLATILE,
    REG_SAM_FLAGS, REG_VALUE_TYPE, RegCloseKey, RegCreateKeyExW, RegDeleteValueW, RegEnumValueW,
    RegOpenKeyExW, RegSetValueExW,
};
use windows::core::{PCWSTR, PWSTR};

use startup_items_core::config::DEFAULT_RUN_KEY;
use startup_items_core::{RunEntry, RunStore, SyncError, SyncResult, log_debug};

use crate::value;
use crate::wide::{from_wide, to_wide};

/// Longest value name the registry allows, plus the terminator.
const MAX_VALUE_NAME: usize = 16_384;
/// Initial data buffer; grown when a value is larger.
const INITIAL_DATA_BYTES: usize = 4096;

/// A Run key under `HKEY_CURRENT_USER`.
pub struct RegistryRunKey {
    subkey: String,
}

impl RegistryRunKey {
    pub fn new(subkey: impl Into<String>) -> Self {
        Self {
            subkey: subkey.into(),
        }
    }

    pub fn subkey(&self) -> &str {
        &self.subkey
    }

    /// Opens the key, returning `None` if it does not exist.
    fn open(&self, access: REG_SAM_FLAGS) -> SyncResult<Option<OpenKey>> {
        let wide_key = to_wide(&self.subkey);
        let mut key = HKEY::default();
        // SAFETY: RegOpenKeyExW is a standard Win32 registry API. We pass valid
        // pointers and the returned handle is closed by `OpenKey`'s drop.
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR(wide_key.as_ptr()),
                None,
                access,
                &mut key,
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status.is_err() {
            return Err(store_error("open", &self.subkey, status));
        }
        Ok(Some(OpenKey(key)))
    }

    /// Opens the key for writing, creating it if needed.
    fn create(&self) -> SyncResult<OpenKey> {
        let wide_key = to_wide(&self.subkey);
        let mut key = HKEY::default();
        // SAFETY: RegCreateKeyExW opens or creates the key; all optional
        // pointers are omitted and the handle is closed by `OpenKey`'s drop.
        let status = unsafe {
            RegCreateKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR(wide_key.as_ptr()),
                None,
                PCWSTR::null(),
                REG_OPTION_NON_VOLATILE,
                KEY_SET_VALUE | KEY_QUERY_VALUE,
                None,
                &mut key,
                None,
            )
        };
        if status.is_err() {
            return Err(store_error("create", &self.subkey, status));
        }
        Ok(OpenKey(key))
    }
}

impl Default for RegistryRunKey {
    fn default() -> Self {
        Self::new(DEFAULT_RUN_KEY)
    }
}

impl RunStore for RegistryRunKey {
    fn read_values(&self) -> SyncResult<Option<Vec<RunEntry>>> {
        let Some(key) = self.open(KEY_QUERY_VALUE)? else {
            return Ok(None);
        };
        let mut values = Vec::new();
        let mut name = vec![0u16; MAX_VALUE_NAME];
        let mut data = vec![0u8; INITIAL_DATA_BYTES];
        let mut index = 0;
        loop {
            let mut name_len = name.len() as u32;
            let mut data_len = data.len() as u32;
            let mut kind = 0u32;
            // SAFETY: buffer lengths are passed alongside their pointers and
            // updated by the call.
            let status = unsafe {
                RegEnumValueW(
                    key.0,
                    index,
                    Some(PWSTR(name.as_mut_ptr())),
                    &mut name_len,
                    None,
                    Some(&mut kind),
                    Some(data.as_mut_ptr()),
                    Some(&mut data_len),
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status == ERROR_MORE_DATA {
                // Retry the same index with room for the value.
                data.resize(data_len as usize, 0);
                continue;
            }
            if status.is_err() {
                return Err(store_error("enumerate", &self.subkey, status));
            }
            let value_name = from_wide(&name[..name_len as usize]);
            let bytes = &data[..data_len as usize];
            let text = value::decode(kind, bytes);
            let kind = value::kind_of(kind, bytes, &text);
            values.push(RunEntry::new(value_name, text).with_kind(kind));
            index += 1;
        }
        Ok(Some(values))
    }

    fn value_names(&self) -> SyncResult<Vec<String>> {
        Ok(self
            .read_values()?
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    fn delete_value(&mut self, name: &str) -> SyncResult<()> {
        let Some(key) = self.open(KEY_SET_VALUE)? else {
            return Ok(());
        };
        let wide_name = to_wide(name);
        // SAFETY: RegDeleteValueW is a standard Win32 registry API.
        let status = unsafe { RegDeleteValueW(key.0, PCWSTR(wide_name.as_ptr())) };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(());
        }
        if status.is_err() {
            return Err(store_error("delete value from", &self.subkey, status));
        }
        log_debug!("deleted registry value \"{name}\"");
        Ok(())
    }

    fn set_value(&mut self, entry: &RunEntry) -> SyncResult<()> {
        let name = &entry.name;
        let key = self.create()?;
        let wide_name = to_wide(name);
        let (kind, bytes) = value::encode(&entry.kind, &entry.command_line);
        // SAFETY: RegSetValueExW is a standard Win32 registry API. The slice
        // carries the exact byte length of the data for `kind`.
        let status = unsafe {
            RegSetValueExW(
                key.0,
                PCWSTR(wide_name.as_ptr()),
                None,
                REG_VALUE_TYPE(kind),
                Some(&bytes),
            )
        };
        if status.is_err() {
            return Err(store_error("write value to", &self.subkey, status));
        }
        log_debug!("wrote registry value \"{name}\"");
        Ok(())
    }
}

/// An open registry key handle, closed on drop.
struct OpenKey(HKEY);

impl Drop for OpenKey {
    fn drop(&mut self) {
        // SAFETY: RegCloseKey is safe to call on any valid HKEY.
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

fn store_error(action: &str, subkey: &str, status: impl std::fmt::Debug) -> SyncError {
    SyncError::Store(format!(
        "could not {action} registry key HKCU\\{subkey}: {status:?}"
    ))
}
