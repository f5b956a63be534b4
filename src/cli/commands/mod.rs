//! CLI command handlers, one submodule per top-level command.

// Handlers are not public library API; skip the pedantic doc lints.
#[allow(clippy::missing_errors_doc)]
pub mod api;
#[allow(clippy::missing_errors_doc)]
pub mod config;
#[allow(clippy::missing_errors_doc)]
pub mod register;
