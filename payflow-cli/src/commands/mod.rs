//! CLI command implementations

pub mod home;
pub mod login;
pub mod logout;
pub mod pay;
pub mod status;

use payflow_core::SessionStore;
use std::path::Path;
use std::time::Duration;

/// Delay before "navigating" to the login flow after an auth failure.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Open the session store rooted at the app storage directory.
pub fn session_store(storage_dir: &Path) -> SessionStore {
    SessionStore::new(storage_dir)
}
