use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::constants;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structured error carrying a category, a message and optional hints.
    #[error("{kind}: {message}")]
    Internal {
        kind: ErrorKind,
        message: Cow<'static, str>,
        context: Option<ErrorContext>,
    },
}

/// Error categories for [`Error::Internal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Config,
    Validation,
    Input,
    Interrupted,
    Registration,
    Verification,
    HttpRequest,
    Api,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Config => "Configuration",
            Self::Validation => "Validation",
            Self::Input => "Input",
            Self::Interrupted => "Interrupted",
            Self::Registration => "Registration",
            Self::Verification => "Verification",
            Self::HttpRequest => "HttpRequest",
            Self::Api => "Api",
        };
        write!(f, "{name}")
    }
}

/// Additional context attached to an [`Error::Internal`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    pub details: Option<Value>,
    pub suggestion: Option<Cow<'static, str>>,
}

impl ErrorContext {
    #[must_use]
    pub fn with_suggestion(suggestion: Cow<'static, str>) -> Self {
        Self {
            details: None,
            suggestion: Some(suggestion),
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// JSON representation of an error for structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_type: String,
    pub message: String,
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    fn internal(
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
        context: Option<ErrorContext>,
    ) -> Self {
        Self::Internal {
            kind,
            message: message.into(),
            context,
        }
    }

    /// Returns the category of a structured error.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Internal { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// True when the user aborted an interactive prompt.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Self::Internal {
                kind: ErrorKind::Interrupted,
                ..
            }
        )
    }

    #[must_use]
    pub fn home_directory_not_found() -> Self {
        Self::internal(
            ErrorKind::Config,
            "Could not determine the home directory",
            Some(ErrorContext::with_suggestion(Cow::Owned(format!(
                "Set {} to choose a configuration directory explicitly.",
                constants::ENV_CONFIG_DIR
            )))),
        )
    }

    #[must_use]
    pub fn credentials_not_found(path: &Path) -> Self {
        Self::internal(
            ErrorKind::Config,
            format!(
                "No organization URL and API token found in {} or the environment",
                path.display()
            ),
            Some(ErrorContext::with_suggestion(Cow::Owned(format!(
                "Run 'okta register' to create an organization, or set {} and {}.",
                constants::ENV_CLIENT_ORG_URL,
                constants::ENV_CLIENT_TOKEN
            )))),
        )
    }

    pub fn validation_error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::internal(
            ErrorKind::Validation,
            format!("Validation error: {}", message.into()),
            None,
        )
    }

    #[must_use]
    pub fn missing_required_input(flag: &str) -> Self {
        Self::internal(
            ErrorKind::Input,
            format!("--{flag} is required when not running in an interactive terminal"),
            Some(ErrorContext::with_suggestion(Cow::Owned(format!(
                "Pass --{flag} on the command line."
            )))),
        )
    }

    pub fn invalid_input(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::internal(ErrorKind::Input, reason, None)
    }

    #[must_use]
    pub fn interrupted() -> Self {
        Self::internal(ErrorKind::Interrupted, "Operation cancelled by user", None)
    }

    pub fn registration_failed(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::internal(
            ErrorKind::Registration,
            format!("Failed to create organization: {}", reason.into()),
            Some(ErrorContext::with_suggestion(Cow::Owned(format!(
                "You can still sign up manually at {}",
                constants::SIGNUP_FALLBACK_URL
            )))),
        )
    }

    pub fn verification_failed(
        attempts: usize,
        duration_ms: u64,
        last_observation: impl Into<Cow<'static, str>>,
    ) -> Self {
        let last_observation = last_observation.into();
        Self::internal(
            ErrorKind::Verification,
            format!("Failed to verify organization after {attempts} attempts"),
            Some(
                ErrorContext::with_suggestion(Cow::Borrowed(
                    "Check your email for the activation message, then sign in to finish setup.",
                ))
                .with_details(json!({
                    "attempts": attempts,
                    "duration_ms": duration_ms,
                    "last_observation": last_observation,
                })),
            ),
        )
    }

    pub fn backup_failed(path: &Path, cause: impl fmt::Display) -> Self {
        Self::internal(
            ErrorKind::Config,
            format!(
                "Failed to back up existing configuration {}: {cause}",
                path.display()
            ),
            None,
        )
    }

    pub fn config_write_failed(path: &Path, cause: impl fmt::Display) -> Self {
        Self::internal(
            ErrorKind::Config,
            format!("Failed to write configuration {}: {cause}", path.display()),
            Some(ErrorContext::with_suggestion(Cow::Borrowed(
                constants::ERR_PERMISSION,
            ))),
        )
    }

    pub fn request_failed(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::internal(ErrorKind::HttpRequest, reason, None)
    }


    #[must_use]
    pub fn api_error(status: u16, body: &str) -> Self {
        let suggestion = match status {
            401 => Some(constants::ERR_API_CREDENTIALS),
            403 => Some(constants::ERR_PERMISSION_DENIED),
            404 => Some(constants::ERR_ENDPOINT_NOT_FOUND),
            429 => Some(constants::ERR_RATE_LIMITED),
            500..=599 => Some(constants::ERR_SERVER_ERROR),
            _ => None,
        };
        let details = serde_json::from_str::<Value>(body).unwrap_or_else(|_| json!(body));
        Self::internal(
            ErrorKind::Api,
            format!("Request failed with status {status}"),
            Some(ErrorContext {
                details: Some(json!({ "status": status, "body": details })),
                suggestion: suggestion.map(Cow::Borrowed),
            }),
        )
    }

    /// Convert error to JSON representation for structured output
    #[must_use]
    pub fn to_json(&self) -> JsonError {
        let (error_type, message, context, details) = match self {
            Self::Internal {
                kind,
                message,
                context,
            } => (
                kind.to_string(),
                message.to_string(),
                context
                    .as_ref()
                    .and_then(|c| c.suggestion.as_ref())
                    .map(ToString::to_string),
                context.as_ref().and_then(|c| c.details.clone()),
            ),
            Self::Io(io_err) => {
                let context = match io_err.kind() {
                    std::io::ErrorKind::NotFound => Some(constants::ERR_FILE_NOT_FOUND),
                    std::io::ErrorKind::PermissionDenied => Some(constants::ERR_PERMISSION),
                    _ => None,
                };
                (
                    "FileSystem".to_string(),
                    io_err.to_string(),
                    context.map(str::to_string),
                    None,
                )
            }
            Self::Network(req_err) => {
                let context = if req_err.is_connect() {
                    Some(constants::ERR_CONNECTION)
                } else if req_err.is_timeout() {
                    Some(constants::ERR_TIMEOUT)
                } else {
                    None
                };
                (
                    "Network".to_string(),
                    req_err.to_string(),
                    context.map(str::to_string),
                    None,
                )
            }
            Self::Yaml(yaml_err) => (
                "YAMLParsing".to_string(),
                yaml_err.to_string(),
                Some(constants::ERR_YAML_SYNTAX.to_string()),
                None,
            ),
            Self::Json(json_err) => (
                "JSONParsing".to_string(),
                json_err.to_string(),
                Some(constants::ERR_JSON_SYNTAX.to_string()),
                None,
            ),
        };

        JsonError {
            error_type,
            message,
            context,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_is_detected() {
        assert!(Error::interrupted().is_interrupted());
        assert!(!Error::invalid_input("nope").is_interrupted());
    }

    #[test]
    fn test_registration_failed_points_to_signup_page() {
        let err = Error::registration_failed("status 500");
        let json = err.to_json();
        assert_eq!(json.error_type, "Registration");
        assert!(json.message.contains("status 500"));
        assert!(json
            .context
            .unwrap()
            .contains(constants::SIGNUP_FALLBACK_URL));
    }

    #[test]
    fn test_api_error_keeps_json_body_as_details() {
        let err = Error::api_error(404, r#"{"errorCode":"E0000007"}"#);
        assert_eq!(err.kind(), Some(ErrorKind::Api));
        let details = err.to_json().details.unwrap();
        assert_eq!(details["status"], 404);
        assert_eq!(details["body"]["errorCode"], "E0000007");
    }

    #[test]
    fn test_verification_failed_records_attempts() {
        let err = Error::verification_failed(12, 220_000, "status PENDING");
        assert_eq!(
            err.to_string(),
            "Verification: Failed to verify organization after 12 attempts"
        );
        let details = err.to_json().details.unwrap();
        assert_eq!(details["attempts"], 12);
        assert_eq!(details["last_observation"], "status PENDING");
    }
}
