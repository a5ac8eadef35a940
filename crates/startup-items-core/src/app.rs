//! Application state shared by every command.

use crate::store::{LinkStore, RunStore};
use crate::{Elevation, RunList, StartupLinks, SyncError};
use crate::{log_debug, log_info, log_warn};

/// Base title shown by `status`.
pub const APP_TITLE: &str = "Startup Items";

/// Owns both entry lists and the elevation flag captured at startup.
pub struct AppState<R, L> {
    pub run: RunList<R>,
    pub links: StartupLinks<L>,
    is_elevated: bool,
}

/// Result of asking for an elevated relaunch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaunch {
    /// Already running as administrator; nothing was started.
    AlreadyElevated,
    /// A new elevated instance was started; this one should exit.
    Started,
    /// The launch failed or the user declined the prompt.
    Declined,
}

impl<R: RunStore, L: LinkStore> AppState<R, L> {
    pub fn new(run_store: R, link_store: L, is_elevated: bool) -> Self {
        Self {
            run: RunList::new(run_store),
            links: StartupLinks::new(link_store),
            is_elevated,
        }
    }

    pub fn is_elevated(&self) -> bool {
        self.is_elevated
    }

    /// Returns the title, annotated when running as administrator.
    pub fn title(&self) -> String {
        if self.is_elevated {
            format!("Administrator: {APP_TITLE}")
        } else {
            APP_TITLE.to_string()
        }
    }

    /// Populates both lists.
    ///
    /// A failure in one list does not stop the other from loading; every
    /// failure is logged and returned.
    pub fn load_all(&mut self) -> Vec<SyncError> {
        let mut errors = Vec::new();
        if let Err(e) = self.run.load() {
            log_warn!("could not load run entries: {e}");
            errors.push(e);
        }
        if let Err(e) = self.links.load() {
            log_warn!("could not load startup links: {e}");
            errors.push(e);
        }
        errors
    }

    /// Starts an elevated copy of this program unless already elevated.
    ///
    /// Failures, including a declined consent prompt, are swallowed and
    /// reported as [`Relaunch::Declined`].
    pub fn relaunch_as_admin(&self, elevation: &impl Elevation, args: &[String]) -> Relaunch {
        if self.is_elevated {
            return Relaunch::AlreadyElevated;
        }
        match elevation.relaunch_elevated(args) {
            Ok(()) => {
                log_info!("started elevated instance");
                Relaunch::Started
            }
            Err(e) => {
                log_debug!("elevated relaunch did not happen: {e}");
                Relaunch::Declined
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElevation, MemoryRunStore, TextCodec};
    use crate::{RunEntry, StartupFolder};

    type TestState = AppState<MemoryRunStore, StartupFolder<TextCodec>>;

    fn state(dir: &std::path::Path, elevated: bool) -> TestState {
        AppState::new(
            MemoryRunStore::with_values(&[("Foo", "foo.exe")]),
            StartupFolder::new(dir, TextCodec),
            elevated,
        )
    }

    #[test]
    fn title_is_annotated_only_when_elevated() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(state(dir.path(), false).title(), "Startup Items");
        assert_eq!(
            state(dir.path(), true).title(),
            "Administrator: Startup Items"
        );
    }

    #[test]
    fn elevation_flag_comes_from_the_elevation_check() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let normal = FakeElevation::default();
        let admin = FakeElevation {
            elevated: true,
            ..Default::default()
        };

        // Act
        let a = state(dir.path(), normal.is_elevated());
        let b = state(dir.path(), admin.is_elevated());

        // Assert
        assert!(!a.is_elevated());
        assert!(b.is_elevated());
    }

    #[test]
    fn load_all_populates_both_lists() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Bar.lnk"), "[link]\nC:\\bar.exe\n-x\n").unwrap();
        let mut app = state(dir.path(), false);

        // Act
        let errors = app.load_all();

        // Assert
        assert!(errors.is_empty());
        assert_eq!(app.run.entries(), &[RunEntry::new("Foo", "foo.exe")]);
        assert_eq!(app.links.entries().len(), 1);
        assert_eq!(app.links.entries()[0].arguments, "-x");
    }

    #[test]
    fn load_all_keeps_going_when_the_folder_is_unreadable() {
        // Arrange: a regular file where the folder should be.
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("Startup");
        std::fs::write(&not_a_dir, "").unwrap();
        let mut app = state(&not_a_dir, false);

        // Act
        let errors = app.load_all();

        // Assert
        assert_eq!(errors.len(), 1);
        assert_eq!(app.run.entries().len(), 1);
    }

    #[test]
    fn relaunch_is_skipped_when_already_elevated() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let app = state(dir.path(), true);
        let elevation = FakeElevation {
            grant: true,
            ..Default::default()
        };

        // Act
        let outcome = app.relaunch_as_admin(&elevation, &[]);

        // Assert
        assert_eq!(outcome, Relaunch::AlreadyElevated);
        assert_eq!(elevation.relaunches.get(), 0);
    }

    #[test]
    fn declined_relaunch_is_swallowed() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let app = state(dir.path(), false);
        let elevation = FakeElevation::default();

        // Act
        let outcome = app.relaunch_as_admin(&elevation, &["status".into()]);

        // Assert
        assert_eq!(outcome, Relaunch::Declined);
        assert_eq!(elevation.relaunches.get(), 1);
    }

    #[test]
    fn granted_relaunch_reports_started() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let app = state(dir.path(), false);
        let elevation = FakeElevation {
            grant: true,
            ..Default::default()
        };

        // Act
        let outcome = app.relaunch_as_admin(&elevation, &[]);

        // Assert
        assert_eq!(outcome, Relaunch::Started);
    }
}
