use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Uses the value given on the command line, asking for it otherwise.
pub fn resolve(given: Option<String>, prompt: &str) -> Result<String> {
    match given.map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => ask(prompt),
    }
}

fn ask(prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("A value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(value.trim().to_string())
}
