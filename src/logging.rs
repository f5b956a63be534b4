//! Request and response logging utilities with automatic secret redaction.
//!
//! This module provides logging capabilities for HTTP requests and responses,
//! with built-in automatic redaction of sensitive information including:
//! - Authorization headers (`SSWS` API tokens)
//! - Token-bearing fields of JSON bodies (`apiToken`, `activationToken`, ...)

use serde_json::Value;
use tracing::{debug, info, trace};

const REDACTED: &str = "[REDACTED]";

/// Redacts sensitive values from strings
#[must_use]
pub fn redact_sensitive_value(value: &str) -> String {
    if value.is_empty() {
        value.to_string()
    } else {
        REDACTED.to_string()
    }
}

/// Checks if a header name should be redacted
#[must_use]
pub fn should_redact_header(header_name: &str) -> bool {
    let lower = header_name.to_lowercase();
    matches!(
        lower.as_str(),
        "authorization" | "x-api-key" | "cookie" | "set-cookie" | "token" | "password"
    )
}

/// Checks if a JSON field name carries a credential
#[must_use]
pub fn should_redact_field(field_name: &str) -> bool {
    let lower = field_name.to_lowercase();
    lower.ends_with("token") || lower == "password" || lower == "secret" || lower == "value"
}

/// Masks credential fields in a JSON body; non-JSON bodies are returned as-is.
#[must_use]
pub fn redact_body(body: &str) -> String {
    let Ok(mut value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };
    redact_value(&mut value);
    value.to_string()
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if should_redact_field(key) && field.is_string() {
                    *field = Value::String(REDACTED.to_string());
                } else {
                    redact_value(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_value),
        _ => {}
    }
}

/// Logs an HTTP request with optional headers and body
pub fn log_request(method: &str, url: &str, headers: &[(String, String)], body: Option<&str>) {
    info!(
        target: "okta::http",
        "→ {} {}",
        method.to_uppercase(),
        url
    );

    if !headers.is_empty() {
        debug!(target: "okta::http", "Request headers:");
        for (name, value) in headers {
            let display_value = if should_redact_header(name) {
                REDACTED.to_string()
            } else {
                value.clone()
            };
            debug!(target: "okta::http", "  {}: {}", name, display_value);
        }
    }

    if let Some(body_content) = body {
        trace!(
            target: "okta::http",
            "Request body: {}",
            redact_body(body_content)
        );
    }
}

/// Logs an HTTP response status, duration and (redacted, truncated) body
pub fn log_response(status: u16, duration_ms: u128, body: Option<&str>, max_body_len: usize) {
    info!(
        target: "okta::http",
        "← {} ({}ms)",
        status,
        duration_ms
    );

    log_response_body(body, max_body_len);
}

/// Helper function to log response body with truncation
fn log_response_body(body: Option<&str>, max_body_len: usize) {
    let Some(body_content) = body else {
        return;
    };
    let redacted = redact_body(body_content);

    if redacted.len() > max_body_len {
        let cut = (0..=max_body_len)
            .rev()
            .find(|&i| redacted.is_char_boundary(i))
            .unwrap_or(0);
        trace!(
            target: "okta::http",
            "Response body: {} (truncated at {} chars)",
            &redacted[..cut],
            max_body_len
        );
    } else {
        trace!(
            target: "okta::http",
            "Response body: {}",
            redacted
        );
    }
}

/// Gets the maximum body length from `OKTA_CLI_LOG_MAX_BODY` environment variable
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var(crate::constants::ENV_LOG_MAX_BODY)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000)
}
