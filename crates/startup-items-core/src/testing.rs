//! In-memory stand-ins for the platform stores.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use crate::entry::names_match;
use crate::store::{RunStore, ShortcutCodec, ShortcutData};
use crate::{Elevation, RunEntry, SyncError, SyncResult, ValueKind};

/// A registry key kept in a `Vec` so value order is observable.
#[derive(Debug, Default)]
pub struct MemoryRunStore {
    /// `None` models a key that does not exist yet.
    pub values: Option<Vec<RunEntry>>,
    /// Makes every `set_value` fail, as a key without write access would.
    pub fail_writes: bool,
}

impl MemoryRunStore {
    pub fn with_values(values: &[(&str, &str)]) -> Self {
        Self::with_entries(values.iter().map(|(n, v)| RunEntry::new(*n, *v)).collect())
    }

    pub fn with_entries(entries: Vec<RunEntry>) -> Self {
        Self {
            values: Some(entries),
            fail_writes: false,
        }
    }

    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .flatten()
            .map(|e| (e.name.clone(), e.command_line.clone()))
            .collect()
    }

    /// Registry type stored for `name`, if the value exists.
    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.values
            .iter()
            .flatten()
            .find(|e| names_match(&e.name, name))
            .map(|e| e.kind.clone())
    }
}

impl RunStore for MemoryRunStore {
    fn read_values(&self) -> SyncResult<Option<Vec<RunEntry>>> {
        Ok(self.values.clone())
    }

    fn value_names(&self) -> SyncResult<Vec<String>> {
        Ok(self
            .values
            .iter()
            .flatten()
            .map(|e| e.name.clone())
            .collect())
    }

    fn delete_value(&mut self, name: &str) -> SyncResult<()> {
        if let Some(values) = &mut self.values {
            values.retain(|e| !names_match(&e.name, name));
        }
        Ok(())
    }

    fn set_value(&mut self, entry: &RunEntry) -> SyncResult<()> {
        if self.fail_writes {
            return Err(SyncError::Store("access is denied".into()));
        }
        let values = self.values.get_or_insert_with(Vec::new);
        match values.iter_mut().find(|e| names_match(&e.name, &entry.name)) {
            Some(slot) => *slot = entry.clone(),
            None => values.push(entry.clone()),
        }
        Ok(())
    }
}

/// Stores a shortcut as two lines of text: target, then arguments.
///
/// Files whose first line is not `[link]` are treated as unresolvable.
#[derive(Debug, Default)]
pub struct TextCodec;

const TEXT_LINK_HEADER: &str = "[link]";

impl ShortcutCodec for TextCodec {
    fn read(&self, path: &Path) -> SyncResult<ShortcutData> {
        let content = fs::read_to_string(path)?;
        let mut lines = content.lines();
        if lines.next() != Some(TEXT_LINK_HEADER) {
            return Err(SyncError::Store(format!(
                "{} is not a shortcut",
                path.display()
            )));
        }
        Ok(ShortcutData {
            target: lines.next().unwrap_or_default().to_string(),
            arguments: lines.next().unwrap_or_default().to_string(),
        })
    }

    fn write(&self, path: &Path, target: &Path, arguments: &str) -> SyncResult<()> {
        let content = format!("{TEXT_LINK_HEADER}\n{}\n{arguments}\n", target.display());
        fs::write(path, content)?;
        Ok(())
    }
}

/// A codec whose writes always fail, for stores that cannot be written.
#[derive(Debug, Default)]
pub struct ReadOnlyCodec;

impl ShortcutCodec for ReadOnlyCodec {
    fn read(&self, path: &Path) -> SyncResult<ShortcutData> {
        TextCodec.read(path)
    }

    fn write(&self, path: &Path, _target: &Path, _arguments: &str) -> SyncResult<()> {
        Err(SyncError::Store(format!("{}: access is denied", path.display())))
    }
}

/// Elevation stub that records relaunch attempts.
#[derive(Debug, Default)]
pub struct FakeElevation {
    pub elevated: bool,
    pub grant: bool,
    pub relaunches: Cell<usize>,
}

impl Elevation for FakeElevation {
    fn is_elevated(&self) -> bool {
        self.elevated
    }

    fn relaunch_elevated(&self, _args: &[String]) -> Result<(), String> {
        self.relaunches.set(self.relaunches.get() + 1);
        if self.grant {
            Ok(())
        } else {
            Err("the operation was canceled by the user".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_matches_names_beyond_ascii() {
        // Arrange
        let mut store = MemoryRunStore::with_values(&[("Ärger", "a.exe")]);

        // Act
        store.set_value(&RunEntry::new("ärger", "b.exe")).unwrap();

        // Assert
        assert_eq!(store.snapshot(), vec![("ärger".to_string(), "b.exe".to_string())]);
        store.delete_value("ÄRGER").unwrap();
        assert!(store.snapshot().is_empty());
    }
}
