//! Handler for `okta register`.

use crate::cli::RegisterArgs;
use crate::config::manager::ConfigManager;
use crate::engine::executor::RequestExecutor;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::interactive::mock::InputOutput;
use crate::interactive::resolve_field;
use crate::output::Output;
use crate::registration::{RegistrationInput, RegistrationOutcome, Registrar};

/// Builds the registration input from flags, prompting for what is missing.
///
/// Fields are resolved in a fixed order so a non-interactive run reports the
/// first missing flag before any network activity.
pub fn collect_input<T: InputOutput + ?Sized>(
    args: &RegisterArgs,
    io: &T,
) -> Result<RegistrationInput, Error> {
    Ok(RegistrationInput {
        first_name: resolve_field("first-name", args.first_name.as_deref(), true, io)?,
        last_name: resolve_field("last-name", args.last_name.as_deref(), true, io)?,
        email: resolve_field("email", args.email.as_deref(), true, io)?,
        country: resolve_field("country", args.country.as_deref(), true, io)?,
        company: resolve_field("company", args.company.as_deref(), false, io)?,
        oie_enabled: args.oie,
    })
}

/// Line announcing the new organization; printed even in quiet mode.
#[must_use]
pub fn domain_line(org_url: &str) -> String {
    format!("Your Okta Domain: {org_url}")
}

pub async fn execute_register<E, F, T>(
    args: &RegisterArgs,
    registrar: &Registrar<'_, E, F>,
    io: &T,
    output: &Output,
) -> Result<RegistrationOutcome, Error>
where
    E: RequestExecutor,
    F: FileSystem,
    T: InputOutput + ?Sized,
{
    let input = collect_input(args, io)?;
    let outcome = registrar.register(&input).await?;

    output.success("New Okta Account created!");
    output.data(domain_line(&outcome.org_url));
    output.info(format!(
        "To use this organization from the command line, credentials were saved to {}",
        outcome.config_path.display()
    ));
    Ok(outcome)
}

/// Registrar over the real config directory and compiled-in endpoints.
pub fn registrar<'a, E: RequestExecutor, F: FileSystem>(
    executor: &'a E,
    manager: &'a ConfigManager<F>,
    output: &Output,
) -> Registrar<'a, E, F> {
    Registrar::new(executor, manager).with_output(output.clone())
}
