//! Elevation check
//!
//! Only used for the startup warning; nothing is disabled when it returns `false`.

/// Text of the warning shown when the process is not elevated
pub const NOT_ELEVATED_WARNING: &str =
    "The program is running without administrator privileges. Some changes may not be saved.";

/// Whether the process runs with administrator rights.
#[cfg(windows)]
pub fn is_elevated() -> bool {
    use windows::Win32::UI::Shell::IsUserAnAdmin;

    unsafe { IsUserAnAdmin().as_bool() }
}

#[cfg(not(windows))]
pub fn is_elevated() -> bool {
    false
}
