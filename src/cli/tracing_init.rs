//! Tracing/logging initialization for the CLI.

use crate::constants;
use tracing_subscriber::EnvFilter;

/// Wrapper type to write logs to file or stderr.
struct FileOrStderr {
    file: Option<std::sync::Mutex<std::fs::File>>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for FileOrStderr {
    type Writer = Box<dyn std::io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.file
            .as_ref()
            .and_then(|mutex| mutex.lock().ok())
            .and_then(|file| file.try_clone().ok())
            .map_or_else(
                || Box::new(std::io::stderr()) as Self::Writer,
                |cloned| Box::new(cloned) as Self::Writer,
            )
    }
}

/// Filter for `-v`/`-vv`: this crate's modules and the `okta::http` wire log,
/// with dependencies held at `warn`.
fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn,okta_cli_client=debug,okta::http=debug",
        _ => "warn,okta_cli_client=trace,okta::http=trace",
    }
}

/// Picks the filter directive: `-v` wins over `OKTA_CLI_LOG`, which wins over `error`.
fn filter_directive(verbosity: u8, env_directive: Option<String>) -> String {
    if verbosity > 0 {
        return verbosity_filter(verbosity).to_string();
    }
    env_directive
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| verbosity_filter(0).to_string())
}

/// Initialize tracing-subscriber for request, poll and config-write events.
pub fn init_tracing(verbosity: u8) {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let directive = filter_directive(verbosity, std::env::var(constants::ENV_LOG).ok());
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("error"));

    let log_format = std::env::var(constants::ENV_LOG_FORMAT)
        .map_or_else(|_| "text".to_string(), |s| s.to_lowercase());

    if log_format != "json" && log_format != "text" {
        // Tracing is not yet initialized; eprintln! is the only output channel available.
        // ast-grep-ignore: no-println
        eprintln!(
            "Warning: Unrecognized {} '{log_format}'. Valid values: 'json', 'text'. Using 'text'.",
            constants::ENV_LOG_FORMAT
        );
    }

    let writer = std::env::var(constants::ENV_LOG_FILE).ok().map_or_else(
        || FileOrStderr { file: None },
        |path| match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => FileOrStderr {
                file: Some(Mutex::new(file)),
            },
            Err(e) => {
                // Tracing is not yet initialized; eprintln! is the only output channel available.
                // ast-grep-ignore: no-println
                eprintln!("Warning: Could not open log file '{path}': {e}. Using stderr.");
                FileOrStderr { file: None }
            }
        },
    );

    if log_format == "json" {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_span_list(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_line_number(true)
            .with_writer(writer);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(false)
            .with_line_number(false)
            .with_writer(writer);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
