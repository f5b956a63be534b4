//! Developer-organization registration: create an org, wait for it to be
//! provisioned, then persist its credentials to `okta.yaml`.

pub mod client;
pub mod poller;

use crate::config::manager::ConfigManager;
use crate::constants;
use crate::engine::executor::RequestExecutor;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::output::Output;
use crate::resilience::RetryConfig;
use poller::Poller;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Profile of the user who will own the new organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub country: String,
    #[serde(rename = "okta_oie")]
    pub oie_enabled: bool,
}

/// Response of the registration endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationCreationResult {
    pub activation_token: String,
    pub developer_org_cli_token: String,
}

/// Response of the verification endpoint; `api_token` and `org_url` are
/// only meaningful once `status` is `ACTIVE`.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerificationResult {
    pub status: String,
    pub api_token: String,
    pub org_url: String,
}

impl VerificationResult {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == constants::STATUS_ACTIVE
    }
}

impl std::fmt::Debug for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationResult")
            .field("status", &self.status)
            .field(
                "api_token",
                &crate::logging::redact_sensitive_value(&self.api_token),
            )
            .field("org_url", &self.org_url)
            .finish()
    }
}

/// Where the registration service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationEndpoints {
    pub base_url: String,
    pub registration_id: String,
}

impl Default for RegistrationEndpoints {
    fn default() -> Self {
        Self {
            base_url: constants::REGISTRATION_BASE_URL.to_string(),
            registration_id: constants::REGISTRATION_ID.to_string(),
        }
    }
}

impl RegistrationEndpoints {
    #[must_use]
    pub fn new(base_url: impl Into<String>, registration_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            registration_id: registration_id.into(),
        }
    }

    #[must_use]
    pub fn registration_url(&self) -> String {
        format!(
            "{}/api/v1/registration/{}/register",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.registration_id)
        )
    }

    #[must_use]
    pub fn verification_url(&self, developer_org_cli_token: &str) -> String {
        format!(
            "{}/api/internal/v1/developer/redeem/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(developer_org_cli_token)
        )
    }
}

/// What a successful registration produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub org_url: String,
    pub config_path: PathBuf,
    pub backup_path: Option<PathBuf>,
}

/// Runs backup, creation, verification and config write in order.
pub struct Registrar<'a, E: RequestExecutor, F: FileSystem> {
    executor: &'a E,
    config: &'a ConfigManager<F>,
    endpoints: RegistrationEndpoints,
    retry: RetryConfig,
    output: Output,
}

impl<'a, E: RequestExecutor, F: FileSystem> Registrar<'a, E, F> {
    #[must_use]
    pub fn new(executor: &'a E, config: &'a ConfigManager<F>) -> Self {
        Self {
            executor,
            config,
            endpoints: RegistrationEndpoints::default(),
            retry: RetryConfig::default(),
            output: Output::new(true, false),
        }
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: RegistrationEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Registers a new organization for `input` and saves its credentials.
    ///
    /// Nothing is written to `okta.yaml` unless verification succeeds; a
    /// pre-existing file is copied aside before any network call.
    ///
    /// # Errors
    /// Returns an error if the backup fails, the organization cannot be
    /// created, it never becomes active, or the config cannot be written
    pub async fn register(&self, input: &RegistrationInput) -> Result<RegistrationOutcome, Error> {
        let backup_path = self.config.backup_if_exists()?;
        if let Some(path) = &backup_path {
            self.output.info(format!(
                "Backed up existing configuration to {}",
                path.display()
            ));
        }

        self.output
            .info("Creating new Okta Organization, this may take a minute:");
        let created = client::create_organization(self.executor, &self.endpoints, input).await?;
        info!("Organization created, waiting for activation");
        self.output
            .info("An account activation email has been sent to you.");

        let verified = Poller::new(self.executor, &self.endpoints, self.retry.clone())
            .with_output(self.output.clone())
            .poll(&created.developer_org_cli_token)
            .await?;

        let config_path = self
            .config
            .write_client_config(&verified.org_url, &verified.api_token)?;

        Ok(RegistrationOutcome {
            org_url: verified.org_url,
            config_path,
            backup_path,
        })
    }
}
