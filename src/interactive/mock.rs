use crate::error::Error;
use inquire::validator::Validation;
use inquire::InquireError;
use std::io::IsTerminal;

/// Trait abstraction for terminal interaction to enable mocking
#[cfg_attr(test, mockall::automock)]
pub trait InputOutput {
    /// Whether a human can answer prompts (stdin is a terminal).
    fn is_interactive(&self) -> bool;

    /// Print text to output with newline
    fn println(&self, text: &str) -> Result<(), Error>;

    /// Ask for a single line of text.
    ///
    /// Implementations return [`Error::interrupted`] when the user aborts the prompt.
    fn prompt(&self, label: &str, required: bool) -> Result<String, Error>;
}

/// Real implementation backed by `inquire` on the attached terminal
pub struct RealInputOutput;

impl InputOutput for RealInputOutput {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn println(&self, text: &str) -> Result<(), Error> {
        // ast-grep-ignore: no-println
        println!("{text}");
        Ok(())
    }

    fn prompt(&self, label: &str, required: bool) -> Result<String, Error> {
        let mut text = inquire::Text::new(label);
        if required {
            text = text.with_validator(|input: &str| {
                if input.trim().is_empty() {
                    Ok(Validation::Invalid("This field is required".into()))
                } else {
                    Ok(Validation::Valid)
                }
            });
        }

        text.prompt().map_err(|e| match e {
            InquireError::OperationInterrupted | InquireError::OperationCanceled => {
                Error::interrupted()
            }
            InquireError::IO(io_err) => Error::Io(io_err),
            other => Error::invalid_input(other.to_string()),
        })
    }
}
