//! Editing session
//!
//! A [`Session`] is the state behind the window: the scope being edited, the
//! in-memory list and the current selection. Each public method is one user
//! action. Failures never escape a method; they end up as a dialog and the
//! session stays usable.

use crate::backup::{self, BackupDocument};
use crate::dialogs::Dialogs;
use crate::path_list::{AddOutcome, Direction, PathList};
use crate::privilege::NOT_ELEVATED_WARNING;
use crate::scope::Scope;
use crate::store::EnvironmentStore;
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Session {
    scope: Scope,
    list: PathList,
    selected: Option<usize>,
    /// Entry targeted by an open edit dialog
    editing: Option<usize>,
    status: String,
}

impl Session {
    /// Start a session on `scope` with its current value.
    pub fn start(store: &dyn EnvironmentStore, scope: Scope) -> Self {
        let mut session = Self {
            scope,
            ..Self::default()
        };
        session.reload(store);
        session
    }

    /// Warn once when the process is not elevated. Nothing else changes.
    pub fn warn_if_not_elevated(elevated: bool, dialogs: &mut dyn Dialogs) {
        if !elevated {
            warn!("Running without administrator privileges");
            dialogs.warning("Warning", NOT_ELEVATED_WARNING);
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn list(&self) -> &PathList {
        &self.list
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Last action, for the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether an edit started by [`Session::begin_edit`] is still pending.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.list.len());
    }

    /// Re-read the value for the current scope, discarding unsaved edits.
    pub fn reload(&mut self, store: &dyn EnvironmentStore) {
        let raw = store.read_path(self.scope);
        self.list.load(&raw);
        self.selected = None;
        self.editing = None;
        info!(
            "Loaded {} PATH with {} entries",
            self.scope.label(),
            self.list.len()
        );
        self.status = format!("Loaded {}", self.scope.panel_title());
    }

    /// Switch to `scope` and load its value. Unsaved edits are dropped without asking.
    pub fn switch_scope(&mut self, store: &dyn EnvironmentStore, scope: Scope) {
        self.scope = scope;
        self.reload(store);
    }

    /// Append a directory chosen by the user.
    pub fn add(&mut self, dialogs: &mut dyn Dialogs, path: &str) -> AddOutcome {
        let outcome = self.list.add(path);
        match outcome {
            AddOutcome::Added => {
                self.editing = None;
                self.selected = Some(self.list.len() - 1);
                self.status = format!("Added entry to {}", self.scope.panel_title());
            }
            AddOutcome::Duplicate => dialogs.info(
                "Information",
                "The specified path is already added to the PATH variable",
            ),
            AddOutcome::Empty => {}
        }
        outcome
    }

    /// Start editing the selected entry and return its current value, to
    /// pre-fill the edit dialog.
    ///
    /// Shows a notice and returns `None` when nothing is selected. Any change
    /// to the list (add, delete, move, reload, import) cancels the edit.
    pub fn begin_edit(&mut self, dialogs: &mut dyn Dialogs) -> Option<String> {
        let index = self.require_selection(dialogs, "Select a path to edit")?;
        let current = self.list.get(index)?.to_string();
        self.editing = Some(index);
        Some(current)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Replace the entry being edited with `value`, unvalidated.
    ///
    /// Returns `false` when no edit is pending, e.g. because the list changed
    /// after [`Session::begin_edit`].
    pub fn apply_edit(&mut self, value: &str) -> bool {
        let Some(index) = self.editing.take() else {
            return false;
        };
        let replaced = self.list.edit(index, value);
        if replaced {
            self.status = format!("Edited entry {} of {}", index + 1, self.scope.panel_title());
        }
        replaced
    }

    /// Delete the selected entry after confirmation.
    pub fn delete_selected(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let Some(index) = self.require_selection(dialogs, "Select a path to delete") else {
            return false;
        };
        if !dialogs.confirm(
            "Confirmation",
            "Are you sure you want to delete the selected path?",
        ) {
            return false;
        }
        if self.list.remove(index).is_none() {
            return false;
        }
        self.selected = None;
        self.editing = None;
        self.status = format!("Removed entry from {}", self.scope.panel_title());
        true
    }

    /// Move the selected entry one step; the selection follows it.
    pub fn move_selected(&mut self, dialogs: &mut dyn Dialogs, direction: Direction) -> bool {
        let Some(index) = self.require_selection(dialogs, "Select a path to move") else {
            return false;
        };
        match self.list.move_entry(index, direction) {
            Some(new_index) => {
                self.selected = Some(new_index);
                self.editing = None;
                self.status = format!("Reordered {}", self.scope.panel_title());
                true
            }
            None => false,
        }
    }

    /// Write the list back and broadcast the change.
    pub fn save(&mut self, store: &mut dyn EnvironmentStore, dialogs: &mut dyn Dialogs) -> bool {
        let value = self.list.serialize();
        match store.write_path(self.scope, &value) {
            Ok(()) => {
                store.notify_changed();
                self.status = format!("Saved {} PATH and broadcasted change", self.scope.label());
                dialogs.info("Success", "PATH variable successfully updated");
                true
            }
            Err(e) => {
                warn!("Saving {} PATH failed: {}", self.scope.label(), e);
                dialogs.error("Error", &format!("Failed to save PATH variable: {e}"));
                false
            }
        }
    }

    /// Default name for the export dialog.
    pub fn suggested_backup_name(&self, username: Option<&str>, now: NaiveDateTime) -> String {
        backup::suggested_file_name(self.scope, username, now)
    }

    /// Write the in-memory list to `path`. The registry is not consulted.
    pub fn export_to(&mut self, dialogs: &mut dyn Dialogs, path: &Path, now: NaiveDateTime) -> bool {
        let doc = BackupDocument::export(&self.list, self.scope, now);
        match doc.write_to_file(path) {
            Ok(()) => {
                self.status = format!("Backup saved to {}", path.display());
                dialogs.info(
                    "Success",
                    &format!("PATH backup successfully saved to file:\n{}", path.display()),
                );
                true
            }
            Err(e) => {
                warn!("Export to {} failed: {}", path.display(), e);
                dialogs.error("Error", &format!("Failed to save PATH to file: {e}"));
                false
            }
        }
    }

    /// Replace scope and list with the contents of the backup at `path`.
    ///
    /// Nothing changes unless the file is valid and the user confirms. The
    /// registry is not written; the restored list still has to be saved.
    pub fn import_from(&mut self, dialogs: &mut dyn Dialogs, path: &Path) -> bool {
        let (doc, prompt) = match BackupDocument::read_from_file(path)
            .and_then(|doc| doc.confirmation_message().map(|prompt| (doc, prompt)))
        {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("Import from {} failed: {}", path.display(), e);
                dialogs.error("Error", &format!("Failed to load PATH from file: {e}"));
                return false;
            }
        };

        if !dialogs.confirm("Restoration Confirmation", &prompt) {
            info!("Restore of {} declined", path.display());
            return false;
        }

        let (scope, list) = doc.into_restore();
        if let Some(scope) = scope {
            self.scope = scope;
        }
        self.list = list;
        self.selected = None;
        self.editing = None;
        info!(
            "Restored {} entries into {} PATH from {}",
            self.list.len(),
            self.scope.label(),
            path.display()
        );
        self.status = format!("Restored {} from backup (not saved yet)", self.scope.panel_title());
        dialogs.info("Success", "PATH backup successfully loaded from file");
        true
    }

    fn require_selection(&self, dialogs: &mut dyn Dialogs, notice: &str) -> Option<usize> {
        match self.selected {
            Some(index) if index < self.list.len() => Some(index),
            _ => {
                dialogs.info("Information", notice);
                None
            }
        }
    }
}
