//! Handler for `okta api <group> <operation>`.

use crate::config::credentials::{ClientCredentials, CredentialsResolver};
use crate::config::manager::ConfigManager;
use crate::engine::executor::{self, RequestExecutor};
use crate::engine::generator;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::output::Output;
use crate::utils::pretty_print_body;
use clap::error::ErrorKind as ClapErrorKind;

/// Credentials from `env` alone when it is complete; otherwise `manager` is
/// built and `okta.yaml` fills the gaps.
pub fn resolve_credentials_with<F: FileSystem>(
    env: CredentialsResolver<'_>,
    manager: impl FnOnce() -> Result<ConfigManager<F>, Error>,
) -> Result<ClientCredentials, Error> {
    if let Some(credentials) = env.resolve() {
        return Ok(credentials);
    }
    let manager = manager()?;
    let config = manager.load()?;
    env.with_config(config.as_ref())
        .resolve()
        .ok_or_else(|| Error::credentials_not_found(&manager.config_path()))
}

pub async fn execute_api_command<E: RequestExecutor>(
    args: Vec<String>,
    credentials: impl FnOnce() -> Result<ClientCredentials, Error>,
    executor: &E,
    output: &Output,
) -> Result<(), Error> {
    let matches = match generator::generate_command_tree()
        .try_get_matches_from(std::iter::once("api".to_string()).chain(args))
    {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(());
        }
        Err(e) => return Err(Error::invalid_input(e.render().to_string())),
    };

    let call = generator::operation_call_from_matches(&matches)?;
    let credentials = credentials()?;

    let body = executor::execute_operation(executor, &call, &credentials).await?;
    if let Some(rendered) = pretty_print_body(&body) {
        output.data(rendered);
    }
    Ok(())
}
