//! Shared test utilities

use std::path::PathBuf;

/// Cached binary path for the okta CLI to avoid repeated lookups
#[allow(deprecated)]
pub static OKTA_BIN: std::sync::LazyLock<PathBuf> =
    std::sync::LazyLock::new(|| assert_cmd::cargo::cargo_bin("okta"));

/// Test helper to create a command with the cached binary
pub fn okta_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(&*OKTA_BIN);
    cmd.env_remove("OKTA_CLIENT_ORGURL")
        .env_remove("OKTA_CLIENT_TOKEN")
        .env_remove("OKTA_CLI_LOG");
    cmd
}
