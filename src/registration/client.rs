use super::{OrganizationCreationResult, RegistrationEndpoints, RegistrationInput, VerificationResult};
use crate::engine::executor::{ApiRequest, RequestExecutor};
use crate::error::Error;
use reqwest::Method;
use serde_json::json;
use tracing::debug;

/// Asks the registration service to create a developer organization.
///
/// Only a 200 with a decodable body counts as success. This call is never retried.
///
/// # Errors
/// Returns a registration error on transport failure, any other status, or
/// a body without a developer-org token
pub async fn create_organization<E: RequestExecutor>(
    executor: &E,
    endpoints: &RegistrationEndpoints,
    input: &RegistrationInput,
) -> Result<OrganizationCreationResult, Error> {
    let body = json!({ "userProfile": input }).to_string();
    let request = ApiRequest::new(Method::POST, endpoints.registration_url())
        .json()
        .body(body);

    let response = executor
        .execute(request)
        .await
        .map_err(|e| Error::registration_failed(e.to_string()))?;

    if response.status != 200 {
        return Err(Error::registration_failed(format!(
            "registration service returned status {}: {}",
            response.status,
            response.body.trim()
        )));
    }

    let result: OrganizationCreationResult = serde_json::from_str(&response.body)
        .map_err(|e| Error::registration_failed(format!("unexpected response: {e}")))?;

    if result.developer_org_cli_token.is_empty() {
        return Err(Error::registration_failed(
            "response did not include a developer organization token",
        ));
    }

    debug!("Registration accepted");
    Ok(result)
}

/// Makes one verification request for the organization identified by `developer_org_cli_token`.
///
/// # Errors
/// Returns an error on transport failure, a non-200 status, or an
/// undecodable body
pub async fn poll_once<E: RequestExecutor>(
    executor: &E,
    endpoints: &RegistrationEndpoints,
    developer_org_cli_token: &str,
) -> Result<VerificationResult, Error> {
    let request =
        ApiRequest::new(Method::GET, endpoints.verification_url(developer_org_cli_token)).json();

    let response = executor.execute(request).await?;
    if response.status != 200 {
        return Err(Error::api_error(response.status, &response.body));
    }

    Ok(serde_json::from_str(&response.body)?)
}
