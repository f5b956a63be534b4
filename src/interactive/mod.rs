use crate::error::Error;
use tracing::debug;

pub mod mock;

use mock::InputOutput;

/// Maximum allowed input length to prevent memory exhaustion
const MAX_INPUT_LENGTH: usize = 1024;

/// Maximum number of prompts for a required field before giving up
const MAX_RETRIES: usize = 3;

/// Resolves a field from its flag value, falling back to a prompt.
///
/// `flag` is the kebab-case flag name (`first-name`); the prompt label is
/// derived from it (`First name`).
///
/// # Errors
/// Returns an error if a required value is missing and the session is not
/// interactive, if the prompt fails or is interrupted, or if the user keeps
/// submitting invalid input
pub fn resolve_field<T: InputOutput + ?Sized>(
    flag: &str,
    explicit: Option<&str>,
    required: bool,
    io: &T,
) -> Result<String, Error> {
    if let Some(value) = explicit.filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }

    if !required {
        return Ok(String::new());
    }

    if !io.is_interactive() {
        return Err(Error::missing_required_input(flag));
    }

    let label = label_for_flag(flag);
    for attempt in 1..=MAX_RETRIES {
        let answer = prompt_for_input_with_io(&label, io)?;
        if !answer.is_empty() {
            return Ok(answer);
        }

        debug!("Empty answer for --{flag} (attempt {attempt} of {MAX_RETRIES})");
        if attempt < MAX_RETRIES {
            io.println(&format!(
                "{label} is required. (Attempt {attempt} of {MAX_RETRIES})"
            ))?;
        }
    }

    Err(Error::invalid_input(format!(
        "Maximum retry attempts ({MAX_RETRIES}) exceeded for --{flag}"
    )))
}

/// Testable prompt that trims and sanitizes the answer
///
/// # Errors
/// Returns an error if the prompt fails, the input is too long, or it
/// contains control characters
pub fn prompt_for_input_with_io<T: InputOutput + ?Sized>(
    label: &str,
    io: &T,
) -> Result<String, Error> {
    let input = io.prompt(label, true)?;
    let trimmed_input = input.trim();

    // Validate input length
    if trimmed_input.len() > MAX_INPUT_LENGTH {
        return Err(Error::invalid_input(format!(
            "Input too long: {} characters (maximum: {MAX_INPUT_LENGTH})",
            trimmed_input.len()
        )));
    }

    // Sanitize input - check for control characters
    if trimmed_input.chars().any(|c| c.is_control() && c != '\t') {
        return Err(Error::invalid_input(
            "Input contains invalid control characters",
        ));
    }

    Ok(trimmed_input.to_string())
}

/// `first-name` -> `First name`
#[must_use]
pub fn label_for_flag(flag: &str) -> String {
    let spaced = flag.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
