//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{PreflightError, Result};

use super::Prompt;

/// Convert dialoguer errors to PreflightError.
fn map_dialoguer_err(e: dialoguer::Error) -> PreflightError {
    PreflightError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask the user a free-text question on the terminal.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let answer = match &prompt.default {
        Some(default) => input
            .default(default.clone())
            .show_default(false)
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?,
        None => input.interact_text_on(term).map_err(map_dialoguer_err)?,
    };

    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialoguer_error_maps_to_io() {
        let err = dialoguer::Error::IO(std::io::Error::other("closed"));
        assert!(matches!(map_dialoguer_err(err), PreflightError::Io(_)));
    }
}
