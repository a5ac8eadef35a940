//! Keeps an in-memory list of Run key entries and the registry in step.
//!
//! The list is the single source of truth. Every edit rewrites the whole
//! key so that its values match the list exactly.

use crate::entry::{names_match, validate_value_name};
use crate::store::RunStore;
use crate::{EntryPatch, RunEntry, SyncError, SyncResult};
use crate::{log_debug, log_info, log_warn};

/// Ordered Run key entries backed by a [`RunStore`].
pub struct RunList<S> {
    store: S,
    entries: Vec<RunEntry>,
}

impl<S: RunStore> RunList<S> {
    /// Creates an empty list. Call [`RunList::load`] to populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[RunEntry] {
        &self.entries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the list with the values currently under the key.
    ///
    /// Blank value names (the key's default value) are skipped. A missing
    /// key leaves the list untouched.
    pub fn load(&mut self) -> SyncResult<()> {
        let Some(values) = self.store.read_values()? else {
            log_debug!("run key does not exist, nothing to load");
            return Ok(());
        };

        let mut entries: Vec<RunEntry> = Vec::with_capacity(values.len());
        for value in values {
            if value.name.trim().is_empty() {
                continue;
            }
            match entries.iter_mut().find(|e| names_match(&e.name, &value.name)) {
                Some(existing) => {
                    log_warn!(
                        "duplicate run entry \"{}\", keeping the last value",
                        value.name
                    );
                    existing.command_line = value.command_line;
                    existing.kind = value.kind;
                }
                None => entries.push(value),
            }
        }

        log_info!("loaded {} run entries", entries.len());
        self.entries = entries;
        Ok(())
    }

    /// Appends an entry and rewrites the key.
    ///
    /// The list only changes once the key has been rewritten.
    pub fn add_entry(&mut self, entry: RunEntry) -> SyncResult<()> {
        validate_value_name(&entry.name)?;
        if self.position(&entry.name).is_some() {
            return Err(SyncError::DuplicateName(entry.name));
        }
        log_debug!("adding run entry \"{}\"", entry.name);
        let mut next = self.entries.clone();
        next.push(entry);
        self.commit(next)
    }

    /// Deletes the registry value for `name` and drops it from the list.
    pub fn remove_entry(&mut self, name: &str) -> SyncResult<RunEntry> {
        let index = self
            .position(name)
            .ok_or_else(|| SyncError::NotFound(name.to_string()))?;
        self.store.delete_value(&self.entries[index].name)?;
        log_debug!("removed run entry \"{name}\"");
        Ok(self.entries.remove(index))
    }

    /// Applies `patch` to the entry named `name` and rewrites the key.
    ///
    /// The list only changes once the key has been rewritten.
    pub fn update_entry(&mut self, name: &str, patch: EntryPatch) -> SyncResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| SyncError::NotFound(name.to_string()))?;

        if let Some(new_name) = &patch.name {
            validate_value_name(new_name)?;
            let clash = self
                .entries
                .iter()
                .enumerate()
                .any(|(i, e)| i != index && names_match(&e.name, new_name));
            if clash {
                return Err(SyncError::DuplicateName(new_name.clone()));
            }
        }

        let mut next = self.entries.clone();
        let entry = &mut next[index];
        if let Some(new_name) = patch.name {
            entry.name = new_name;
        }
        if let Some(command_line) = patch.command_line {
            entry.command_line = command_line;
        }
        log_debug!("updated run entry \"{name}\"");
        self.commit(next)
    }

    /// Deletes every value under the key, then writes one per entry.
    pub fn resync(&mut self) -> SyncResult<()> {
        rewrite(&mut self.store, &self.entries)
    }

    fn commit(&mut self, next: Vec<RunEntry>) -> SyncResult<()> {
        rewrite(&mut self.store, &next)?;
        self.entries = next;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| names_match(&e.name, name))
    }
}

fn rewrite<S: RunStore>(store: &mut S, entries: &[RunEntry]) -> SyncResult<()> {
    for name in store.value_names()? {
        store.delete_value(&name)?;
    }
    for entry in entries {
        store.set_value(entry)?;
    }
    log_info!("run key rewritten with {} entries", entries.len());
    Ok(())
}
