pub mod commands;
pub mod errors;
pub mod tracing_init;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "okta",
    author,
    version,
    about = "Okta CLI: register a developer organization and call the management API",
    long_about = "Create a free Okta developer organization from the command line and\n\
                  manage its users, groups, applications and policies.\n\n\
                  Examples:\n  \
                  okta register\n  \
                  okta register --first-name Ada --last-name Lovelace --email ada@example.com --country UK\n  \
                  okta api users list --limit 5\n  \
                  okta config show"
)]
pub struct Cli {
    /// Output all errors as structured JSON to stderr
    #[arg(long, global = true, help = "Output errors in JSON format")]
    pub json_errors: bool,

    /// Suppress progress and success messages; only requested data and errors are printed
    #[arg(
        long,
        short = 'q',
        global = true,
        help = "Suppress informational output"
    )]
    pub quiet: bool,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        global = true,
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v for debug, -vv for trace)"
    )]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign up for a new Okta developer organization
    #[command(
        long_about = "Create a new Okta developer organization and save its credentials.\n\n\
                      Missing values are prompted for when a terminal is attached. Without\n\
                      a terminal every required flag must be given. An existing\n\
                      ~/.okta/okta.yaml is backed up before it is replaced.\n\n\
                      Example:\n  \
                      okta register --first-name Ada --last-name Lovelace \\\n    \
                      --email ada@example.com --country UK --company 'Analytical Engines'"
    )]
    Register(RegisterArgs),
    /// Call the Okta management API
    #[command(
        long_about = "Execute an operation against the organization saved by 'okta register'.\n\n\
                      Path parameters are required flags; query parameters are optional\n\
                      flags; request bodies are passed as JSON with --data.\n\n\
                      Examples:\n  \
                      okta api users get --user-id 00u1abcd\n  \
                      okta api groups create --data '{\"profile\":{\"name\":\"Engineering\"}}'\n  \
                      okta api --help  # See available groups",
        disable_help_flag = true
    )]
    Api {
        /// Group, operation and flags, parsed against the operation catalog
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Inspect the saved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Flags of `okta register`. Empty or missing required values are prompted for.
#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    /// First name of the organization owner
    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    /// Last name of the organization owner
    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    /// Email address; the activation email is sent here
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Country of residence
    #[arg(long, value_name = "COUNTRY")]
    pub country: Option<String>,

    /// Company or organization name (optional)
    #[arg(long, value_name = "COMPANY")]
    pub company: Option<String>,

    /// Create an Identity Engine (OIE) organization
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub oie: bool,
}

impl Default for RegisterArgs {
    fn default() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            country: None,
            company: None,
            oie: true,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the path of okta.yaml
    Path,
    /// Print the saved configuration with the token redacted
    Show,
}
