use crate::engine::catalog::{self, Operation};
use crate::error::Error;
use crate::invocation::OperationCall;
use crate::utils::{to_kebab_case, to_static_str};
use clap::{Arg, ArgAction, ArgMatches, Command};

const DATA_ARG: &str = "data";

/// Generates the `api` command tree from the operation catalog.
///
/// ```text
/// api users get --user-id 00u1
/// api groups assign-user --group-id 00g1 --user-id 00u1
/// api users create --activate true --data '{"profile":{...}}'
/// ```
#[must_use]
pub fn generate_command_tree() -> Command {
    let mut root_command = Command::new("api")
        .about("Call the Okta management API")
        .subcommand_required(true)
        .arg_required_else_help(true);

    for group in catalog::groups() {
        let mut group_command = Command::new(group)
            .about(format!("{} operations", capitalize_first(&group.replace('-', " "))))
            .subcommand_required(true)
            .arg_required_else_help(true);

        for operation in catalog::operations_in(group) {
            group_command = group_command.subcommand(operation_command(operation));
        }

        root_command = root_command.subcommand(group_command);
    }

    root_command
}

fn operation_command(operation: &Operation) -> Command {
    let mut command = Command::new(operation.name).about(operation.about);

    for name in operation.path_params() {
        command = command.arg(parameter_arg(name, "Path", true));
    }
    for name in operation.query_params {
        command = command.arg(parameter_arg(name, "Query", false));
    }

    if operation.has_body() {
        command = command.arg(
            Arg::new(DATA_ARG)
                .long(DATA_ARG)
                .help("Request body as JSON")
                .value_name("JSON")
                .required(true)
                .action(ArgAction::Set),
        );
    }

    command
}

/// Path and query parameters become `--kebab-case` flags keyed by their wire name.
fn parameter_arg(name: &'static str, location: &str, required: bool) -> Arg {
    let long_name = to_static_str(to_kebab_case(name));
    let value_name = to_static_str(long_name.replace('-', "_").to_uppercase());
    Arg::new(name)
        .long(long_name)
        .help(format!("{location} parameter {name}"))
        .value_name(value_name)
        .required(required)
        .action(ArgAction::Set)
}

/// Resolves matches of the generated tree into an [`OperationCall`].
///
/// # Errors
/// Returns an error if the matches do not name a catalog operation
pub fn operation_call_from_matches(matches: &ArgMatches) -> Result<OperationCall, Error> {
    let Some((group, group_matches)) = matches.subcommand() else {
        return Err(Error::invalid_input("No API group specified"));
    };
    let Some((name, op_matches)) = group_matches.subcommand() else {
        return Err(Error::invalid_input(format!(
            "No operation specified for '{group}'"
        )));
    };
    let operation = catalog::find(group, name)
        .ok_or_else(|| Error::invalid_input(format!("Unknown operation '{group} {name}'")))?;

    let mut call = OperationCall::new(operation);
    for param in operation.path_params() {
        if let Some(value) = op_matches.get_one::<String>(param) {
            call = call.with_path_param(param, value.clone());
        }
    }
    for param in operation.query_params {
        if let Some(value) = op_matches.get_one::<String>(param) {
            call = call.with_query_param(param, value.clone());
        }
    }
    if operation.has_body() {
        call.body = op_matches.get_one::<String>(DATA_ARG).cloned();
    }

    Ok(call)
}

/// Capitalizes the first letter of a string
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
