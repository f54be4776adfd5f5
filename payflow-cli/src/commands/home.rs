//! Landing menu - the session-aware home screen

use anyhow::Result;
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, verbose: bool) -> Result<()> {
    loop {
        ui::clear();
        ui::header("Payment App");
        ui::info("Make a secure cryptocurrency payment");

        let session = super::session_store(storage_dir).load();
        ui::key_value(
            "Logged in",
            if session.is_authenticated() { "yes" } else { "no" },
        );
        ui::separator();

        let items: &[&str] = if session.is_authenticated() {
            &["Make payment", "Logout", "Quit"]
        } else {
            &["Make payment", "Login", "Quit"]
        };

        match ui::select("What would you like to do?", items)? {
            0 => {
                super::pay::run(storage_dir, None, None, None, None, None, verbose).await?;
            }
            1 if session.is_authenticated() => {
                super::logout::run(storage_dir, verbose).await?;
            }
            1 => {
                super::login::run(storage_dir, verbose).await?;
            }
            _ => break,
        }

        println!();
        ui::pause()?;
    }

    Ok(())
}
