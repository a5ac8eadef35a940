pub mod log;

pub mod app;
pub mod config;
pub mod elevation;
pub mod entry;
pub mod error;
pub mod folder;
pub mod run_list;
pub mod startup_links;
pub mod store;

#[cfg(test)]
mod testing;

pub use app::{AppState, Relaunch};
pub use elevation::Elevation;
pub use entry::{EntryPatch, LinkPatch, RunEntry, StartupLink, ValueKind};
pub use error::{SyncError, SyncResult};
pub use folder::StartupFolder;
pub use run_list::RunList;
pub use startup_links::StartupLinks;
pub use store::{LinkStore, RunStore, ShortcutCodec, ShortcutData};
