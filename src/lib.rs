//! PATH editor core
//!
//! Everything the window does lives here so it can be exercised without a
//! display: the [`session::Session`] owns the scope and the path list, reaches
//! the OS through [`store::EnvironmentStore`] and the user through
//! [`dialogs::Dialogs`].

pub mod backup;
pub mod broadcast;
pub mod dialogs;
pub mod error;
pub mod logging;
pub mod path_list;
pub mod privilege;
pub mod scope;
pub mod session;
pub mod store;

#[cfg(windows)]
pub mod registry;

pub use error::{PathEditorError, Result};
pub use path_list::{AddOutcome, Direction, PathList};
pub use scope::Scope;
pub use session::Session;
