//! Centralized string constants for the Okta CLI
//!
//! This module contains commonly used string literals to:
//! - Reduce string duplication
//! - Improve maintainability
//! - Ensure consistency across the codebase

// HTTP Headers
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

// Content Types
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Authentication
pub const AUTH_SCHEME_SSWS: &str = "SSWS";

pub const USER_AGENT: &str = concat!("okta-cli-client/", env!("CARGO_PKG_VERSION"));

// Registration service (compiled in, not user-configurable)
pub const REGISTRATION_BASE_URL: &str = "https://okta-devok12.okta.com";
pub const REGISTRATION_ID: &str = "reg405abrRAkn0TRf5d6";
pub const SIGNUP_FALLBACK_URL: &str = "https://developer.okta.com/signup/";
pub const STATUS_ACTIVE: &str = "ACTIVE";

// Verification polling
pub const VERIFICATION_MAX_ATTEMPTS: usize = 12;
pub const VERIFICATION_DELAY_SECS: u64 = 20;

// Environment Variables
pub const ENV_CONFIG_DIR: &str = "OKTA_CLI_CONFIG_DIR";
pub const ENV_CLIENT_ORG_URL: &str = "OKTA_CLIENT_ORGURL";
pub const ENV_CLIENT_TOKEN: &str = "OKTA_CLIENT_TOKEN";
pub const ENV_LOG: &str = "OKTA_CLI_LOG";
pub const ENV_LOG_FORMAT: &str = "OKTA_CLI_LOG_FORMAT";
pub const ENV_LOG_FILE: &str = "OKTA_CLI_LOG_FILE";
pub const ENV_LOG_MAX_BODY: &str = "OKTA_CLI_LOG_MAX_BODY";

// Config file layout
pub const DIR_CONFIG: &str = ".okta";
pub const FILE_CONFIG: &str = "okta.yaml";

// Error hints
pub const ERR_API_CREDENTIALS: &str =
    "Check that the API token in your configuration is valid and has not expired.";
pub const ERR_PERMISSION_DENIED: &str =
    "Your token may be valid but lack permission for this operation.";
pub const ERR_ENDPOINT_NOT_FOUND: &str = "Check that the resource ID and parameters are correct.";
pub const ERR_RATE_LIMITED: &str = "You're making requests too quickly. Wait before trying again.";
pub const ERR_SERVER_ERROR: &str = "The API server is experiencing issues. Try again later.";
pub const ERR_CONNECTION: &str = "Check that the API server is running and accessible.";
pub const ERR_TIMEOUT: &str = "The API server may be slow or unresponsive. Try again later.";

pub const ERR_FILE_NOT_FOUND: &str = "Check that the file path is correct and the file exists.";
pub const ERR_PERMISSION: &str = "Check file permissions or run with appropriate privileges.";

pub const ERR_YAML_SYNTAX: &str = "Check that your okta.yaml configuration is valid YAML syntax.";
pub const ERR_JSON_SYNTAX: &str = "Check that your request body or response contains valid JSON.";
