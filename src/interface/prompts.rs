use std::path::Path;

use dialoguer::Confirm;

use crate::error::Result;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask before replacing an existing file. Missing files need no confirmation.
pub fn confirm_overwrite(path: &Path, assume_yes: bool) -> Result<bool> {
    if assume_yes || !path.exists() {
        return Ok(true);
    }
    prompt_yes_no(&format!("{} already exists. Overwrite?", path.display()), false)
}
