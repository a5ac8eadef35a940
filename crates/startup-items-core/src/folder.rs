//! A [`LinkStore`] backed by a real directory.
//!
//! Enumeration and deletion go through `std::fs`; decoding and encoding of
//! individual shortcut files is left to a [`ShortcutCodec`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entry::{LINK_EXTENSION, link_file_name, link_name_from_file};
use crate::store::{LinkStore, ShortcutCodec};
use crate::{StartupLink, SyncResult};
use crate::{log_debug, log_warn};

pub struct StartupFolder<C> {
    path: PathBuf,
    codec: C,
    keep_unmanaged_files: bool,
}

impl<C: ShortcutCodec> StartupFolder<C> {
    pub fn new(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            path: path.into(),
            codec,
            keep_unmanaged_files: false,
        }
    }

    /// When set, [`LinkStore::clear`] only removes `.lnk` files.
    pub fn keep_unmanaged_files(mut self, keep: bool) -> Self {
        self.keep_unmanaged_files = keep;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists the regular files in the folder, skipping entries that
    /// cannot be read. A missing folder yields nothing.
    fn files(&self) -> SyncResult<Vec<PathBuf>> {
        let dir = match fs::read_dir(&self.path) {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut files: Vec<PathBuf> = dir
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .map(|entry| entry.path())
            .collect();
        files.sort();
        Ok(files)
    }
}

impl<C: ShortcutCodec> LinkStore for StartupFolder<C> {
    fn read_links(&self) -> SyncResult<Vec<StartupLink>> {
        let mut links = Vec::new();
        for path in self.files()? {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match self.codec.read(&path) {
                Ok(data) => links.push(StartupLink::new(
                    link_name_from_file(file_name),
                    data.target,
                    data.arguments,
                )),
                Err(e) => log_warn!("skipping {}: {e}", path.display()),
            }
        }
        Ok(links)
    }

    fn clear(&mut self) -> SyncResult<()> {
        for path in self.files()? {
            if self.keep_unmanaged_files && !is_link_file(&path) {
                continue;
            }
            log_debug!("deleting {}", path.display());
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn delete_link(&mut self, name: &str) -> SyncResult<()> {
        let path = self.path.join(link_file_name(name));
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_link(&mut self, link: &StartupLink) -> SyncResult<()> {
        fs::create_dir_all(&self.path)?;
        let path = self.path.join(link.file_name());
        log_debug!("writing {}", path.display());
        self.codec.write(&path, &link.target, &link.arguments)
    }
}

fn is_link_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LINK_EXTENSION))
}
