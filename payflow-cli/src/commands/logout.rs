//! Logout command - clears the session marker

use anyhow::Result;
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, _verbose: bool) -> Result<()> {
    super::session_store(storage_dir).logout()?;

    ui::success("Logged out");
    ui::info("Run 'payflow login' to sign back in");
    Ok(())
}
