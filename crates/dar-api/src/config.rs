use std::time::Duration;

use crate::error::ClientError;
use crate::retry::RetryPolicy;

pub const URL_ENV_VAR: &str = "DAR_URL";

/// Configuration for a [Session](crate::Session). Can be created using [SessionConfigBuilder], which is created using the [SessionConfig::builder] method.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the DAR service, e.g. `https://aiservices-dar.cfapps.eu10.hana.ondemand.com/`
    pub base_url: String,
    /// Total time allowed for a single HTTP request.
    pub timeout: Duration,
    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// Policy applied to idempotent requests and to POST requests issued with `retry`.
    pub retry_policy: RetryPolicy,
}

impl SessionConfig {
    /// Create a new [SessionConfigBuilder] for the given base URL.
    pub fn builder(base_url: impl Into<String>) -> SessionConfigBuilder {
        SessionConfigBuilder::new(base_url.into())
    }

    /// Default configuration for the base URL found in the `DAR_URL` environment variable.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var(URL_ENV_VAR)
            .map_err(|e| ClientError::Configuration(format!("{URL_ENV_VAR}: {e}")))?;
        Ok(Self::builder(base_url).build())
    }
}

/// Builder for the SessionConfig
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    pub(crate) fn new(base_url: String) -> SessionConfigBuilder {
        SessionConfigBuilder {
            config: SessionConfig {
                base_url,
                timeout: Duration::from_secs(30 * 60),
                connect_timeout: Duration::from_secs(30),
                retry_policy: RetryPolicy::default(),
            },
        }
    }

    /// Set the total timeout of a single request
    pub fn with_timeout(mut self, timeout: Duration) -> SessionConfigBuilder {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> SessionConfigBuilder {
        self.config.connect_timeout = connect_timeout;
        self
    }

    /// Set the retry policy
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> SessionConfigBuilder {
        self.config.retry_policy = retry_policy;
        self
    }

    /// Set the number of retries, keeping the rest of the retry policy
    pub fn with_num_retries(mut self, num_retries: u32) -> SessionConfigBuilder {
        self.config.retry_policy.max_retries = num_retries;
        self
    }

    /// Build the SessionConfig
    pub fn build(self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = SessionConfig::builder("https://dar.example.com")
            .with_timeout(Duration::from_secs(5))
            .with_num_retries(1)
            .build();

        assert_eq!(config.base_url, "https://dar.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.retry_policy.max_retries, 1);
    }
}
