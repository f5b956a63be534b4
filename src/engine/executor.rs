use crate::config::credentials::ClientCredentials;
use crate::constants;
use crate::error::Error;
use crate::invocation::OperationCall;
use crate::logging;
use crate::resilience::{create_resilient_client, TimeoutConfig};
use reqwest::Method;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// A fully-built HTTP request, independent of the client that sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds `Accept` and `Content-Type` headers for JSON.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.headers.push((
            constants::HEADER_ACCEPT.to_string(),
            constants::CONTENT_TYPE_JSON.to_string(),
        ));
        self.headers.push((
            constants::HEADER_CONTENT_TYPE.to_string(),
            constants::CONTENT_TYPE_JSON.to_string(),
        ));
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends requests. Every outbound call in the crate goes through this seam.
#[allow(async_fn_in_trait)]
pub trait RequestExecutor {
    /// # Errors
    /// Returns an error when the request cannot be sent or the response body
    /// cannot be read. Non-2xx statuses are returned as responses, not errors.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

/// `reqwest`-backed executor with connect and request timeouts.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    max_body_len: usize,
}

impl HttpExecutor {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, Error> {
        Ok(Self::with_client(create_resilient_client(timeouts)?))
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            max_body_len: logging::get_max_body_len(),
        }
    }
}

impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        logging::log_request(
            request.method.as_str(),
            &request.url,
            &request.headers,
            request.body.as_deref(),
        );

        let mut builder = self.client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let start = Instant::now();
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        logging::log_response(
            status,
            start.elapsed().as_millis(),
            Some(&body),
            self.max_body_len,
        );

        Ok(ApiResponse { status, body })
    }
}

/// Builds the request for a resource command against the credentialed org.
///
/// # Errors
/// Returns a validation error for an unknown HTTP method, a missing path
/// parameter, a missing body, or a body that is not valid JSON
pub fn build_request(
    call: &OperationCall,
    credentials: &ClientCredentials,
) -> Result<ApiRequest, Error> {
    let operation = call.operation;
    let method = Method::from_bytes(operation.method.as_bytes()).map_err(|_| {
        Error::validation_error(format!("Unsupported HTTP method '{}'", operation.method))
    })?;

    let mut url = format!("{}{}", credentials.org_url.trim_end_matches('/'), operation.path);
    for name in operation.path_params() {
        let value = call
            .path_params
            .get(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::validation_error(format!("Missing required path parameter '{name}'"))
            })?;
        url = url.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }

    let query: Vec<String> = operation
        .query_params
        .iter()
        .filter_map(|name| {
            call.query_params
                .get(*name)
                .map(|value| format!("{name}={}", urlencoding::encode(value)))
        })
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    let mut request = ApiRequest::new(method, url)
        .header(
            constants::HEADER_AUTHORIZATION,
            credentials.authorization_header(),
        )
        .json();

    match (&call.body, operation.has_body()) {
        (Some(body), true) => {
            serde_json::from_str::<Value>(body)
                .map_err(|e| Error::validation_error(format!("Invalid JSON in --data: {e}")))?;
            request = request.body(body.clone());
        }
        (None, true) => {
            return Err(Error::validation_error(format!(
                "'{} {}' requires a JSON body (--data)",
                operation.group, operation.name
            )));
        }
        (Some(_), false) => {
            return Err(Error::validation_error(format!(
                "'{} {}' does not take a request body",
                operation.group, operation.name
            )));
        }
        (None, false) => {}
    }

    Ok(request)
}

/// Runs a resource command and returns the response body text.
///
/// # Errors
/// Returns an error if the request cannot be built or sent, or an API error
/// carrying the status and body when the response is not 2xx
pub async fn execute_operation<E: RequestExecutor>(
    executor: &E,
    call: &OperationCall,
    credentials: &ClientCredentials,
) -> Result<String, Error> {
    let request = build_request(call, credentials)?;
    debug!(
        "Executing {} {}",
        call.operation.group, call.operation.name
    );

    let response = executor.execute(request).await?;
    if !response.is_success() {
        return Err(Error::api_error(response.status, &response.body));
    }
    Ok(response.body)
}
