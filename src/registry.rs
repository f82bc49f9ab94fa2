//! Registry access for the PATH value
//!
//! Keys are opened right before use and dropped (closed) when each function
//! returns, so no handle outlives a single read or write.

use crate::broadcast;
use crate::error::{PathEditorError, Result};
use crate::scope::{Scope, PATH_VALUE_NAME};
use crate::store::EnvironmentStore;
use tracing::{debug, info};
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WRITE, REG_EXPAND_SZ};
use winreg::{RegKey, RegValue, HKEY};

fn hive(scope: Scope) -> HKEY {
    match scope {
        Scope::User => HKEY_CURRENT_USER,
        Scope::System => HKEY_LOCAL_MACHINE,
    }
}

/// Read the raw PATH value for `scope` without expanding `%VAR%` tokens.
///
/// Returns an empty string when the key or value is missing or unreadable.
pub fn read_path(scope: Scope) -> String {
    let key = match RegKey::predef(hive(scope)).open_subkey_with_flags(scope.subkey(), KEY_READ) {
        Ok(key) => key,
        Err(e) => {
            debug!("Cannot open {} for reading: {}", scope.key_display(), e);
            return String::new();
        }
    };
    match key.get_raw_value(PATH_VALUE_NAME) {
        Ok(raw) => decode_utf16_reg(&raw.bytes),
        Err(e) => {
            debug!("No readable Path value in {}: {}", scope.key_display(), e);
            String::new()
        }
    }
}

/// Store `value` as `REG_EXPAND_SZ` for `scope`.
pub fn write_path(scope: Scope, value: &str) -> Result<()> {
    let key = RegKey::predef(hive(scope))
        .open_subkey_with_flags(scope.subkey(), KEY_READ | KEY_WRITE)
        .map_err(|source| PathEditorError::RegistryAccess {
            action: "open",
            key: scope.key_display(),
            source,
        })?;
    let raw = RegValue {
        bytes: encode_utf16_reg(value),
        vtype: REG_EXPAND_SZ,
    };
    key.set_raw_value(PATH_VALUE_NAME, &raw)
        .map_err(|source| PathEditorError::RegistryAccess {
            action: "write",
            key: scope.key_display(),
            source,
        })?;
    info!("Wrote {} PATH ({} chars)", scope.label(), value.len());
    Ok(())
}

/// [`EnvironmentStore`] over the live registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryStore;

impl EnvironmentStore for RegistryStore {
    fn read_path(&self, scope: Scope) -> String {
        read_path(scope)
    }

    fn write_path(&mut self, scope: Scope, value: &str) -> Result<()> {
        write_path(scope, value)
    }

    fn notify_changed(&mut self) {
        broadcast::notify_environment_changed();
    }
}

fn decode_utf16_reg(bytes: &[u8]) -> String {
    let mut utf16: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();

    while utf16.last() == Some(&0) {
        utf16.pop();
    }

    String::from_utf16_lossy(&utf16)
}

fn encode_utf16_reg(value: &str) -> Vec<u8> {
    value
        .encode_utf16()
        .chain(Some(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}
