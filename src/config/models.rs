use serde::{Deserialize, Serialize};

/// On-disk layout of `okta.yaml`.
///
/// ```yaml
/// okta:
///   client:
///     orgUrl: https://dev-123.okta.com
///     token: 00abc...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersistedConfig {
    #[serde(default)]
    pub okta: OktaSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OktaSection {
    #[serde(default)]
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSection {
    #[serde(default)]
    pub org_url: String,
    #[serde(default)]
    pub token: String,
}

impl PersistedConfig {
    #[must_use]
    pub fn new(org_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            okta: OktaSection {
                client: ClientSection {
                    org_url: org_url.into(),
                    token: token.into(),
                },
            },
        }
    }

    #[must_use]
    pub fn org_url(&self) -> &str {
        &self.okta.client.org_url
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.okta.client.token
    }

    /// Copy with the token replaced by a placeholder, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self::new(
            self.org_url(),
            crate::logging::redact_sensitive_value(self.token()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_nested_camel_case_keys() {
        let config = PersistedConfig::new("https://ada.example.okta.com", "secret");
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(
            yaml,
            "okta:\n  client:\n    orgUrl: https://ada.example.okta.com\n    token: secret\n"
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config: PersistedConfig = serde_yaml::from_str("okta: {}\n").unwrap();
        assert_eq!(config.org_url(), "");
        assert_eq!(config.token(), "");
    }

    #[test]
    fn test_redacted_hides_token() {
        let config = PersistedConfig::new("https://x.okta.com", "secret");
        let redacted = config.redacted();
        assert_eq!(redacted.org_url(), "https://x.okta.com");
        assert_eq!(redacted.token(), "[REDACTED]");
    }
}
