//! Where the PATH value lives
//!
//! The session only talks to this trait. On Windows it is backed by the
//! registry ([`crate::registry::RegistryStore`]); [`MemoryStore`] keeps the
//! values in memory for headless use.

use crate::error::{PathEditorError, Result};
use crate::scope::Scope;
use std::collections::HashMap;
use std::io;

pub trait EnvironmentStore {
    /// Raw `;`-joined value for `scope`. Missing or unreadable values read as `""`.
    fn read_path(&self, scope: Scope) -> String;

    /// Persist `value` for `scope`.
    fn write_path(&mut self, scope: Scope, value: &str) -> Result<()>;

    /// Tell running programs the environment changed. Best effort.
    fn notify_changed(&mut self);
}

/// In-memory store.
///
/// Scopes listed in `read_only` refuse writes with an access error, the way
/// the system key does for an unelevated process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<Scope, String>,
    read_only: Vec<Scope>,
    writes: Vec<(Scope, String)>,
    notifications: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, scope: Scope, value: impl Into<String>) -> Self {
        self.values.insert(scope, value.into());
        self
    }

    pub fn read_only(mut self, scope: Scope) -> Self {
        self.read_only.push(scope);
        self
    }

    pub fn value(&self, scope: Scope) -> Option<&str> {
        self.values.get(&scope).map(String::as_str)
    }

    /// Every successful write, oldest first.
    pub fn writes(&self) -> &[(Scope, String)] {
        &self.writes
    }

    /// How many change notifications were sent.
    pub fn notifications(&self) -> usize {
        self.notifications
    }
}

impl EnvironmentStore for MemoryStore {
    fn read_path(&self, scope: Scope) -> String {
        self.values.get(&scope).cloned().unwrap_or_default()
    }

    fn write_path(&mut self, scope: Scope, value: &str) -> Result<()> {
        if self.read_only.contains(&scope) {
            return Err(PathEditorError::RegistryAccess {
                action: "write",
                key: scope.key_display(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "Access is denied."),
            });
        }
        self.values.insert(scope, value.to_string());
        self.writes.push((scope, value.to_string()));
        Ok(())
    }

    fn notify_changed(&mut self) {
        self.notifications += 1;
    }
}
