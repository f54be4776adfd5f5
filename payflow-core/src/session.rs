//! Session state backed by a local marker file.
//!
//! The demo treats "logged in" as a single persistent flag, the way a
//! browser app would keep it in local storage: one fixed key, the string
//! `"true"` meaning logged in, anything else meaning logged out. Instead of
//! a process-wide mutable flag, readers get an immutable [`Session`]
//! snapshot and refresh it with an explicit reload.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name of the session marker inside the storage directory.
const SESSION_MARKER: &str = "session";
/// Marker contents meaning "logged in". Anything else means logged out.
const LOGGED_IN: &str = "true";

/// Immutable snapshot of the login state at the moment it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// A snapshot representing an active login.
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }

    /// A snapshot representing no login.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Reads and mutates the persistent login marker.
pub struct SessionStore {
    storage_dir: PathBuf,
}

impl SessionStore {
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
        }
    }

    /// Read the marker and return a fresh snapshot.
    ///
    /// An absent, unreadable, or malformed marker counts as logged out.
    pub fn load(&self) -> Session {
        let path = self.marker_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim() == LOGGED_IN => Session::authenticated(),
            Ok(_) => Session::anonymous(),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!("could not read session marker {:?}: {}", path, e);
                }
                Session::anonymous()
            }
        }
    }

    /// Open a session: write the marker and return the new snapshot.
    pub fn login(&self) -> Result<Session> {
        std::fs::create_dir_all(&self.storage_dir)
            .context("Failed to create storage directory")?;
        std::fs::write(self.marker_path(), LOGGED_IN)
            .context("Failed to write session marker")?;
        Ok(Session::authenticated())
    }

    /// Close the session: remove the marker and return the new snapshot.
    ///
    /// Logging out without an active session is a no-op.
    pub fn logout(&self) -> Result<Session> {
        match std::fs::remove_file(self.marker_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).context("Failed to clear session marker"),
        }
        Ok(Session::anonymous())
    }

    fn marker_path(&self) -> PathBuf {
        self.storage_dir.join(SESSION_MARKER)
    }
}
