//! Environment change notification
//!
//! Running programs (Explorer in particular) only pick up a new PATH after a
//! `WM_SETTINGCHANGE` with the "Environment" topic.

/// Maximum time a single top-level window may take to answer the broadcast
pub const BROADCAST_TIMEOUT_MS: u32 = 5000;

/// Topic string sent with the broadcast
pub const ENVIRONMENT_TOPIC: &str = "Environment";

/// Broadcast the change to every top-level window.
///
/// Hung windows are skipped and the result is ignored.
#[cfg(windows)]
pub fn notify_environment_changed() {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Foundation::{LPARAM, WPARAM};
    use windows::Win32::UI::WindowsAndMessaging::{
        SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_SETTINGCHANGE,
    };

    let topic: Vec<u16> = OsStr::new(ENVIRONMENT_TOPIC)
        .encode_wide()
        .chain(Some(0))
        .collect();
    let mut result = 0usize;
    let sent = unsafe {
        SendMessageTimeoutW(
            HWND_BROADCAST,
            WM_SETTINGCHANGE,
            WPARAM(0),
            LPARAM(topic.as_ptr() as isize),
            SMTO_ABORTIFHUNG,
            BROADCAST_TIMEOUT_MS,
            Some(&mut result),
        )
    };
    tracing::debug!("WM_SETTINGCHANGE broadcast returned {}", sent.0);
}

#[cfg(not(windows))]
pub fn notify_environment_changed() {
    tracing::debug!("No environment broadcast on this platform");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_never_panics() {
        // Failures are swallowed; calling it twice must be harmless.
        notify_environment_changed();
        notify_environment_changed();
    }
}
