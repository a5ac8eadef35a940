//! Persistence capabilities the synchronizers call into.
//!
//! Each platform crate (e.g. `startup-items-windows`) provides the
//! implementations; tests use in-memory stand-ins.

use std::path::Path;

use crate::{RunEntry, StartupLink, SyncResult};

/// A registry key holding `name -> command line` values.
pub trait RunStore {
    /// Reads every value under the key, rendered as text and tagged with
    /// its registry type.
    ///
    /// Returns `Ok(None)` when the key does not exist.
    fn read_values(&self) -> SyncResult<Option<Vec<RunEntry>>>;

    /// Returns the names of all values currently under the key.
    fn value_names(&self) -> SyncResult<Vec<String>>;

    /// Deletes a value. A value that does not exist is not an error.
    fn delete_value(&mut self, name: &str) -> SyncResult<()>;

    /// Writes `entry` with the type its [`crate::ValueKind`] asks for,
    /// creating the key if needed.
    fn set_value(&mut self, entry: &RunEntry) -> SyncResult<()>;
}

/// A folder of shortcut files.
pub trait LinkStore {
    /// Reads every resolvable shortcut. Unreadable files are skipped.
    fn read_links(&self) -> SyncResult<Vec<StartupLink>>;

    /// Deletes every file in the folder.
    fn clear(&mut self) -> SyncResult<()>;

    /// Deletes the shortcut for `name`. A missing file is not an error.
    fn delete_link(&mut self, name: &str) -> SyncResult<()>;

    /// Creates (or overwrites) the shortcut file for `link`.
    fn write_link(&mut self, link: &StartupLink) -> SyncResult<()>;
}

/// Target and arguments decoded from a single shortcut file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutData {
    pub target: String,
    pub arguments: String,
}

/// Reads and writes individual shortcut files.
pub trait ShortcutCodec {
    /// Resolves the shortcut at `path` without user interaction.
    fn read(&self, path: &Path) -> SyncResult<ShortcutData>;

    /// Writes a shortcut at `path` pointing at `target` with `arguments`.
    fn write(&self, path: &Path, target: &Path, arguments: &str) -> SyncResult<()>;
}
