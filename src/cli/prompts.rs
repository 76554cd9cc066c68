//! Interactive prompts using dialoguer

use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;

/// Ask before letting a submission overwrite an existing output file
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let message = format!(
        "{} already exists. Overwrite it when the form is submitted?",
        path.display()
    );
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}
