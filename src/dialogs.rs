//! User-facing messages
//!
//! Every action reports back through this trait: informational notices,
//! warnings, blocking errors and yes/no confirmations. The window implements
//! it with native message boxes.

pub trait Dialogs {
    fn info(&mut self, title: &str, message: &str);

    fn warning(&mut self, title: &str, message: &str);

    fn error(&mut self, title: &str, message: &str);

    /// Ask a yes/no question; `true` means the user accepted.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}
