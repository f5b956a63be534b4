//! Handlers for `okta config *` subcommands.

use crate::cli::ConfigCommands;
use crate::config::manager::ConfigManager;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::output::Output;

pub fn execute_config_command<F: FileSystem>(
    command: &ConfigCommands,
    manager: &ConfigManager<F>,
    output: &Output,
) -> Result<(), Error> {
    match command {
        ConfigCommands::Path => {
            output.data(manager.config_path().display());
        }
        ConfigCommands::Show => {
            let Some(config) = manager.load()? else {
                return Err(Error::credentials_not_found(&manager.config_path()));
            };
            let rendered = serde_yaml::to_string(&config.redacted())?;
            output.data(rendered.trim_end());
        }
    }
    Ok(())
}
