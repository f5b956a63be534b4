use clap::Parser;
use okta_cli_client::cli::commands::{api, config, register};
use okta_cli_client::cli::errors::{print_cancelled, print_error_with_json};
use okta_cli_client::cli::tracing_init::init_tracing;
use okta_cli_client::cli::{Cli, Commands};
use okta_cli_client::config::credentials::CredentialsResolver;
use okta_cli_client::config::manager::ConfigManager;
use okta_cli_client::engine::executor::HttpExecutor;
use okta_cli_client::error::Error;
use okta_cli_client::interactive::mock::RealInputOutput;
use okta_cli_client::output::Output;
use okta_cli_client::resilience::TimeoutConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    init_tracing(cli.verbosity);
    okta_cli_client::install_crypto_provider();

    match run_command(cli).await {
        Ok(()) => {}
        Err(e) if e.is_interrupted() => {
            print_cancelled();
        }
        Err(e) => {
            print_error_with_json(&e, json_errors);
            std::process::exit(1);
        }
    }
}

async fn run_command(cli: Cli) -> Result<(), Error> {
    let output = Output::new(cli.quiet, cli.json_errors);

    match cli.command {
        Commands::Register(args) => {
            let manager = ConfigManager::new()?;
            let executor = HttpExecutor::new(&TimeoutConfig::default())?;
            let registrar = register::registrar(&executor, &manager, &output);
            register::execute_register(&args, &registrar, &RealInputOutput, &output)
                .await
                .map(|_| ())
        }
        Commands::Api { args } => {
            let executor = HttpExecutor::new(&TimeoutConfig::default())?;
            api::execute_api_command(
                args,
                || {
                    api::resolve_credentials_with(
                        CredentialsResolver::new(None),
                        ConfigManager::new,
                    )
                },
                &executor,
                &output,
            )
            .await
        }
        Commands::Config { command } => {
            config::execute_config_command(&command, &ConfigManager::new()?, &output)
        }
    }
}
