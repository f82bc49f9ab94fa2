//! Which PATH value is being edited.

use serde::{Deserialize, Serialize};

/// Current-user environment key (under `HKEY_CURRENT_USER`)
pub const USER_ENV_KEY: &str = "Environment";
/// Machine environment key (under `HKEY_LOCAL_MACHINE`)
pub const SYSTEM_ENV_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";
/// Registry value holding the `;`-joined list
pub const PATH_VALUE_NAME: &str = "Path";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    User,
    System,
}

impl Scope {
    /// Subkey path relative to the scope's hive.
    pub fn subkey(self) -> &'static str {
        match self {
            Scope::User => USER_ENV_KEY,
            Scope::System => SYSTEM_ENV_KEY,
        }
    }

    /// Full key name for messages, e.g. `HKCU\Environment`.
    pub fn key_display(self) -> &'static str {
        match self {
            Scope::User => r"HKCU\Environment",
            Scope::System => {
                r"HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment"
            }
        }
    }

    /// Tag used in backup files.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scope::User => "User",
            Scope::System => "System",
        }
    }

    pub fn panel_title(self) -> &'static str {
        match self {
            Scope::User => "User PATH (HKCU)",
            Scope::System => "System PATH (HKLM)",
        }
    }
}
