//! Terminal UI utilities

use colored::Colorize;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Create a spinner progress indicator
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prompt for user confirmation
pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for text input, re-asking until the validator accepts
pub fn input_validated<F>(prompt: &str, validator: F) -> anyhow::Result<String>
where
    F: FnMut(&String) -> Result<(), String>,
{
    use dialoguer::Input;
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(validator)
        .interact_text()?)
}

/// Prompt for optional text input; empty input means none
pub fn optional_input(prompt: &str) -> anyhow::Result<Option<String>> {
    use dialoguer::Input;
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    if value.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Prompt for a password without echoing it
pub fn password(prompt: &str) -> anyhow::Result<String> {
    use dialoguer::Password;
    Ok(Password::new().with_prompt(prompt).interact()?)
}

/// Prompt for a choice from a fixed list, returning the selected index
pub fn select(prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
    use dialoguer::Select;
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

/// Wait for the user to acknowledge before continuing
pub fn pause() -> anyhow::Result<()> {
    use dialoguer::Input;
    let _ = Input::<String>::new()
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Clear the terminal
pub fn clear() {
    let term = Term::stdout();
    let _ = term.clear_screen();
}

/// Print a separator line
pub fn separator() {
    println!("{}", "─".repeat(60).dimmed());
}
