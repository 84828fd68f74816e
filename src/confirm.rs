//! Confirmation port for yes/no prompts.
//!
//! The scaffolder never talks to the terminal directly; it asks a
//! [`Confirmation`] implementation. `-y` swaps in [`AutoConfirm`], which
//! answers yes to everything and keeps the tool usable in scripts and tests.

use dialoguer::Confirm;

use crate::error::AppError;

/// Maps a prompt string to a yes/no answer.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}

/// Answers yes to every prompt without asking.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm;

impl Confirmation for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Blocking interactive prompt on the terminal, defaulting to yes.
#[derive(Debug, Clone, Copy)]
pub struct InteractiveConfirm;

impl Confirmation for InteractiveConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(|e| AppError::config_error(format!("confirmation prompt failed: {e}")))?;
        Ok(answer)
    }
}
