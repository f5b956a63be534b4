//! CLI-agnostic description of a resource-command invocation.
//!
//! The executor accepts an [`OperationCall`] rather than clap `ArgMatches`,
//! so requests can be built from parsed flags or programmatically in tests.

use crate::engine::catalog::Operation;
use std::collections::BTreeMap;

/// A single catalog operation with its parameter values resolved.
#[derive(Debug, Clone)]
pub struct OperationCall {
    pub operation: &'static Operation,

    /// Path parameters keyed by their template name (e.g. `{"userId": "00u1"}`).
    pub path_params: BTreeMap<String, String>,

    /// Query parameters keyed by their wire name; only values the user gave.
    pub query_params: BTreeMap<String, String>,

    /// Raw JSON request body from `--data`.
    pub body: Option<String>,
}

impl OperationCall {
    #[must_use]
    pub const fn new(operation: &'static Operation) -> Self {
        Self {
            operation,
            path_params: BTreeMap::new(),
            query_params: BTreeMap::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_path_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.path_params.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_query_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query_params.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
