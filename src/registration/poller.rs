use super::{client, RegistrationEndpoints, VerificationResult};
use crate::engine::executor::RequestExecutor;
use crate::error::Error;
use crate::output::Output;
use crate::resilience::RetryConfig;
use tokio::time::Instant;
use tracing::{debug, info};

/// Where verification stands after an attempt.
#[derive(Debug)]
pub enum PollState {
    Pending,
    Active(VerificationResult),
    Failed(Error),
}

impl PollState {
    /// `None` while pending, otherwise the terminal result.
    #[must_use]
    pub fn into_outcome(self) -> Option<Result<VerificationResult, Error>> {
        match self {
            Self::Pending => None,
            Self::Active(result) => Some(Ok(result)),
            Self::Failed(err) => Some(Err(err)),
        }
    }
}

/// Maps one attempt to the next state and a short description of what was seen.
///
/// Transport, status and decode errors are indistinguishable from "not yet
/// provisioned": each one leaves the poller pending.
#[must_use]
pub fn classify(attempt: Result<VerificationResult, Error>) -> (PollState, String) {
    match attempt {
        Ok(result) if result.is_active() => {
            let observed = result.status.clone();
            (PollState::Active(result), observed)
        }
        Ok(result) => {
            let observed = if result.status.is_empty() {
                "empty status".to_string()
            } else {
                format!("status {}", result.status)
            };
            (PollState::Pending, observed)
        }
        Err(err) => {
            debug!("Verification attempt failed: {err}");
            (PollState::Pending, err.to_string())
        }
    }
}

/// Polls the verification endpoint at a fixed interval until the org is active.
pub struct Poller<'a, E: RequestExecutor> {
    executor: &'a E,
    endpoints: &'a RegistrationEndpoints,
    retry: RetryConfig,
    output: Output,
}

impl<'a, E: RequestExecutor> Poller<'a, E> {
    #[must_use]
    pub fn new(executor: &'a E, endpoints: &'a RegistrationEndpoints, retry: RetryConfig) -> Self {
        Self {
            executor,
            endpoints,
            retry,
            output: Output::new(true, false),
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Polls until the organization is `ACTIVE` or the attempt budget is spent.
    ///
    /// # Errors
    /// Returns a verification error carrying the attempt count, the elapsed
    /// time and the last observation once every attempt came back pending
    pub async fn poll(&self, developer_org_cli_token: &str) -> Result<VerificationResult, Error> {
        let start = Instant::now();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let outcome =
                client::poll_once(self.executor, self.endpoints, developer_org_cli_token).await;
            let (state, observed) = classify(outcome);
            debug!(
                "Verification attempt {attempt}/{}: {observed}",
                self.retry.max_attempts
            );

            let state = match state {
                PollState::Pending => match self.retry.delay_after(attempt) {
                    Some(delay) => {
                        self.output.progress(".");
                        tokio::time::sleep(delay).await;
                        PollState::Pending
                    }
                    None => {
                        let elapsed_ms =
                            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                        PollState::Failed(Error::verification_failed(
                            attempt,
                            elapsed_ms,
                            observed,
                        ))
                    }
                },
                terminal => terminal,
            };

            if let Some(outcome) = state.into_outcome() {
                self.output.info("");
                if outcome.is_ok() {
                    info!("Organization active after {attempt} attempt(s)");
                }
                return outcome;
            }
        }
    }
}
