//! Startup entry records and the naming rules they follow.

use std::path::PathBuf;

use serde::Serialize;

use crate::{SyncError, SyncResult};

/// Extension given to every shortcut file in the Startup folder.
pub const LINK_EXTENSION: &str = "lnk";

/// Characters Windows refuses in file names.
const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Device names that cannot be used as a file stem on Windows.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// One value under the Run key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunEntry {
    /// Registry value name.
    pub name: String,
    /// Command line executed at logon.
    pub command_line: String,
    /// Registry type the value is written back with.
    #[serde(skip)]
    pub kind: ValueKind,
}

impl RunEntry {
    pub fn new(name: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command_line: command_line.into(),
            kind: ValueKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Registry type of a Run value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValueKind {
    /// `REG_SZ`.
    #[default]
    String,
    /// `REG_EXPAND_SZ`: environment references are expanded at logon.
    ExpandString,
    /// Any other type, kept byte for byte together with the text it was
    /// shown as. Written back unchanged while that text is not edited.
    Raw {
        kind: u32,
        data: Vec<u8>,
        text: String,
    },
}

/// One shortcut file in the Startup folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartupLink {
    /// Display name; the file on disk is `<name>.lnk`.
    pub name: String,
    /// Path the shortcut points at.
    pub target: PathBuf,
    /// Arguments passed to the target.
    pub arguments: String,
}

impl StartupLink {
    pub fn new(
        name: impl Into<String>,
        target: impl Into<PathBuf>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            arguments: arguments.into(),
        }
    }

    /// Returns the file name this link is stored under.
    pub fn file_name(&self) -> String {
        link_file_name(&self.name)
    }
}

/// Field replacements for a [`RunEntry`]. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub command_line: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.command_line.is_none()
    }
}

/// Field replacements for a [`StartupLink`]. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub name: Option<String>,
    pub target: Option<PathBuf>,
    pub arguments: Option<String>,
}

impl LinkPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.target.is_none() && self.arguments.is_none()
    }
}

/// Compares two entry names the way the registry and NTFS do.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Compares two link names by the file each one is stored under, so
/// `Bar` and `bar.LNK` are the same link.
pub fn links_match(a: &str, b: &str) -> bool {
    names_match(&link_file_name(a), &link_file_name(b))
}

/// Returns `<name>.lnk`, or `name` unchanged when it already carries the
/// extension.
pub fn link_file_name(name: &str) -> String {
    if has_link_extension(name) {
        name.to_string()
    } else {
        format!("{name}.{LINK_EXTENSION}")
    }
}

/// Derives a link name from a file name by dropping a trailing `.lnk`.
pub fn link_name_from_file(file_name: &str) -> String {
    if has_link_extension(file_name) {
        file_name[..file_name.len() - LINK_EXTENSION.len() - 1].to_string()
    } else {
        file_name.to_string()
    }
}

fn has_link_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(LINK_EXTENSION))
}

/// Rejects blank registry value names.
pub fn validate_value_name(name: &str) -> SyncResult<()> {
    if name.trim().is_empty() {
        return Err(SyncError::BlankName);
    }
    Ok(())
}

/// Rejects names that cannot become a file in the Startup folder.
pub fn validate_file_name(name: &str) -> SyncResult<()> {
    if name.trim().is_empty() {
        return Err(SyncError::BlankName);
    }
    let invalid = name.chars().any(|c| c.is_control() || FORBIDDEN_CHARS.contains(&c))
        || name.ends_with('.')
        || name.ends_with(' ')
        || is_reserved(name);
    if invalid {
        return Err(SyncError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

fn is_reserved(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name).trim_end();
    RESERVED_NAMES
        .iter()
        .any(|reserved| stem.eq_ignore_ascii_case(reserved))
}
