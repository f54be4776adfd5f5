//! Status command - show the current session state

use anyhow::Result;
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, _verbose: bool) -> Result<()> {
    let session = super::session_store(storage_dir).load();

    ui::header("Session");
    if session.is_authenticated() {
        ui::key_value("Logged in", "yes");
        ui::info("Use 'payflow pay' to make a payment");
    } else {
        ui::key_value("Logged in", "no");
        ui::warning("Not logged in - payments will be rejected");
        ui::info("Run 'payflow login' first");
    }

    Ok(())
}
