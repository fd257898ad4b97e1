use std::thread;
use std::time::Duration;

use reqwest::StatusCode;

use crate::error::ClientError;

/// Bounded exponential backoff applied to requests that fail transiently.
///
/// The n-th retry (starting at 1) waits `backoff_factor * 2^(n-1)`, capped at
/// `max_backoff`. A request is retried when the server answers with one of
/// `retry_statuses` or when the connection could not be established.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: Duration,
    pub max_backoff: Duration,
    pub retry_statuses: Vec<StatusCode>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_factor: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
            retry_statuses: vec![
                StatusCode::PAYLOAD_TOO_LARGE,
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::BAD_GATEWAY,
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::GATEWAY_TIMEOUT,
            ],
        }
    }
}

impl RetryPolicy {
    /// A policy that surfaces the first failure.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff_factor(mut self, backoff_factor: Duration) -> Self {
        self.backoff_factor = backoff_factor;
        self
    }

    /// Delay before the given retry, counted from 1.
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(31);
        self.backoff_factor
            .saturating_mul(1u32 << exponent)
            .min(self.max_backoff)
    }

    pub fn should_retry(&self, error: &ClientError) -> bool {
        match error {
            ClientError::Http { status, .. } => self.retry_statuses.contains(status),
            ClientError::Connection(_) => true,
            _ => false,
        }
    }

    /// Runs `operation` until it succeeds, fails permanently or the retries are exhausted.
    pub fn run<T, F>(&self, operation: F) -> Result<T, ClientError>
    where
        F: FnMut(u32) -> Result<T, ClientError>,
    {
        self.run_with_sleep(operation, thread::sleep)
    }

    pub(crate) fn run_with_sleep<T, F, S>(
        &self,
        mut operation: F,
        mut sleep: S,
    ) -> Result<T, ClientError>
    where
        F: FnMut(u32) -> Result<T, ClientError>,
        S: FnMut(Duration),
    {
        let mut attempt = 0;
        loop {
            match operation(attempt) {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_retries && self.should_retry(&e) => {
                    attempt += 1;
                    let delay = self.backoff(attempt);
                    log::warn!(
                        "Request failed ({e}), retry {attempt}/{} in {delay:?}",
                        self.max_retries
                    );
                    sleep(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
