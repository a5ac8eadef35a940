//! Keeps an in-memory list of Startup folder shortcuts and the folder in
//! step.
//!
//! Like [`crate::RunList`], every edit rewrites the whole folder: all
//! files are removed and one shortcut is recreated per entry.

use crate::entry::{links_match, validate_file_name};
use crate::store::LinkStore;
use crate::{LinkPatch, StartupLink, SyncError, SyncResult};
use crate::{log_debug, log_info, log_warn};

/// Ordered Startup folder shortcuts backed by a [`LinkStore`].
pub struct StartupLinks<S> {
    store: S,
    entries: Vec<StartupLink>,
}

impl<S: LinkStore> StartupLinks<S> {
    /// Creates an empty list. Call [`StartupLinks::load`] to populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[StartupLink] {
        &self.entries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the list with the shortcuts currently in the folder.
    ///
    /// Two files resolving to the same name collapse into one entry
    /// holding the data of the later file.
    ///
    /// Names are compared by the file they are stored under, so `Foo`
    /// and `Foo.lnk` are the same link.
    pub fn load(&mut self) -> SyncResult<()> {
        let mut entries: Vec<StartupLink> = Vec::new();
        for link in self.store.read_links()? {
            match entries.iter_mut().find(|e| links_match(&e.name, &link.name)) {
                Some(existing) => {
                    log_warn!("duplicate startup link \"{}\", keeping the last one", link.name);
                    existing.target = link.target;
                    existing.arguments = link.arguments;
                }
                None => entries.push(link),
            }
        }

        log_info!("loaded {} startup links", entries.len());
        self.entries = entries;
        Ok(())
    }

    /// Appends a shortcut and rewrites the folder.
    ///
    /// The list only changes once the folder has been rewritten.
    pub fn add_entry(&mut self, link: StartupLink) -> SyncResult<()> {
        validate_file_name(&link.name)?;
        if self.position(&link.name).is_some() {
            return Err(SyncError::DuplicateName(link.name));
        }
        log_debug!("adding startup link \"{}\"", link.name);
        let mut next = self.entries.clone();
        next.push(link);
        self.commit(next)
    }

    /// Deletes the shortcut file for `name` and drops it from the list.
    pub fn remove_entry(&mut self, name: &str) -> SyncResult<StartupLink> {
        let index = self
            .position(name)
            .ok_or_else(|| SyncError::NotFound(name.to_string()))?;
        self.store.delete_link(&self.entries[index].name)?;
        log_debug!("removed startup link \"{name}\"");
        Ok(self.entries.remove(index))
    }

    /// Applies `patch` to the shortcut named `name` and rewrites the folder.
    ///
    /// The list only changes once the folder has been rewritten.
    pub fn update_entry(&mut self, name: &str, patch: LinkPatch) -> SyncResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| SyncError::NotFound(name.to_string()))?;

        if let Some(new_name) = &patch.name {
            validate_file_name(new_name)?;
            let clash = self
                .entries
                .iter()
                .enumerate()
                .any(|(i, e)| i != index && links_match(&e.name, new_name));
            if clash {
                return Err(SyncError::DuplicateName(new_name.clone()));
            }
        }

        let mut next = self.entries.clone();
        let link = &mut next[index];
        if let Some(new_name) = patch.name {
            link.name = new_name;
        }
        if let Some(target) = patch.target {
            link.target = target;
        }
        if let Some(arguments) = patch.arguments {
            link.arguments = arguments;
        }
        log_debug!("updated startup link \"{name}\"");
        self.commit(next)
    }

    /// Empties the folder, then writes one shortcut per entry.
    pub fn resync(&mut self) -> SyncResult<()> {
        rewrite(&mut self.store, &self.entries)
    }

    fn commit(&mut self, next: Vec<StartupLink>) -> SyncResult<()> {
        rewrite(&mut self.store, &next)?;
        self.entries = next;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| links_match(&e.name, name))
    }
}

fn rewrite<S: LinkStore>(store: &mut S, links: &[StartupLink]) -> SyncResult<()> {
    store.clear()?;
    for link in links {
        store.write_link(link)?;
    }
    log_info!("startup folder rewritten with {} links", links.len());
    Ok(())
}
