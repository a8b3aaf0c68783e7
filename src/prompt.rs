//! Operator input.
//!
//! Handlers never talk to the terminal directly; they go through a
//! [`Prompter`]. The terminal implementation renders with `dialoguer`.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

/// Errors that can occur while waiting on the operator.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The terminal closed or could not be read.
    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("selection {0} is not one of the offered options")]
    NoSuchOption(usize),
}

/// Asks the operator one question at a time.
pub trait Prompter {
    /// Free text. `default` is shown as a hint; an empty line is returned as-is.
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String, PromptError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError>;

    /// Pick one of `options`, returning its index.
    fn select(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: usize,
    ) -> Result<usize, PromptError>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        let prompt = match default {
            Some(d) => format!("{prompt} [{d}]"),
            None => prompt.to_string(),
        };
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    fn select(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: usize,
    ) -> Result<usize, PromptError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(default)
            .interact()?;
        Ok(index)
    }
}
