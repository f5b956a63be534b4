use crate::config::models::PersistedConfig;
use crate::constants;

/// Organization URL and API token used to authenticate resource commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub org_url: String,
    pub token: String,
}

impl ClientCredentials {
    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", constants::AUTH_SCHEME_SSWS, self.token)
    }
}

/// Resolves credentials with the following priority, per field:
/// 1. Environment: `OKTA_CLIENT_ORGURL`, `OKTA_CLIENT_TOKEN`
/// 2. The persisted `okta.yaml`
pub struct CredentialsResolver<'a> {
    config: Option<&'a PersistedConfig>,
    env_org_url: Option<String>,
    env_token: Option<String>,
}

impl<'a> CredentialsResolver<'a> {
    #[must_use]
    pub fn new(config: Option<&'a PersistedConfig>) -> Self {
        Self {
            config,
            env_org_url: std::env::var(constants::ENV_CLIENT_ORG_URL).ok(),
            env_token: std::env::var(constants::ENV_CLIENT_TOKEN).ok(),
        }
    }

    /// Sets the environment values explicitly (overrides the process environment)
    #[must_use]
    pub fn with_environment(mut self, org_url: Option<String>, token: Option<String>) -> Self {
        self.env_org_url = org_url;
        self.env_token = token;
        self
    }

    /// Swaps the persisted config consulted after the environment.
    #[must_use]
    pub fn with_config<'b>(self, config: Option<&'b PersistedConfig>) -> CredentialsResolver<'b> {
        CredentialsResolver {
            config,
            env_org_url: self.env_org_url,
            env_token: self.env_token,
        }
    }

    /// Returns `None` unless both an org URL and a token were found.
    #[must_use]
    pub fn resolve(&self) -> Option<ClientCredentials> {
        let from_env = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let org_url = from_env(&self.env_org_url).or_else(|| {
            self.config
                .map(PersistedConfig::org_url)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })?;
        let token = from_env(&self.env_token).or_else(|| {
            self.config
                .map(PersistedConfig::token)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })?;

        Some(ClientCredentials {
            org_url: org_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}
