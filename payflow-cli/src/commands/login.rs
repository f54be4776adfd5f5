//! Login command - mock credential prompt that opens a session

use anyhow::Result;
use payflow_core::validate;
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, verbose: bool) -> Result<()> {
    ui::header("Login");
    ui::info("Enter your credentials to continue");

    let email = ui::input_validated("Email", |input: &String| {
        validate::validate_recipient(input)
    })?;
    let _password = ui::password("Password")?;

    if verbose {
        ui::info(&format!("Opening session for {}", email));
    }
    tracing::debug!(%email, "mock login, any credentials are accepted");

    super::session_store(storage_dir).login()?;

    ui::success("Login successful");
    Ok(())
}
