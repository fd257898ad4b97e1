use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use crate::error::ClientError;

pub const TOKEN_ENV_VAR: &str = "DAR_API_TOKEN";

/// Supplies the bearer token attached to every request.
///
/// The token is fetched again for each request so that implementations may
/// refresh expiring tokens behind the scenes.
pub trait CredentialsSource: Debug + Send + Sync {
    fn token(&self) -> Result<String, ClientError>;
}

/// A fixed token, e.g. one obtained out of band from the authentication service.
#[derive(Clone)]
pub struct StaticCredentialsSource {
    token: String,
}

impl StaticCredentialsSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Creates a new instance of `StaticCredentialsSource` from the `DAR_API_TOKEN` environment variable.
    pub fn from_env() -> Result<Self, ClientError> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|e| ClientError::InvalidCredentials(format!("{TOKEN_ENV_VAR}: {e}")))?;
        token.parse()
    }
}

impl Debug for StaticCredentialsSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialsSource")
            .field("token", &"***")
            .finish()
    }
}

impl FromStr for StaticCredentialsSource {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Err(ClientError::InvalidCredentials(
                "token cannot be empty".to_string(),
            ))
        } else {
            Ok(Self::new(s))
        }
    }
}

impl CredentialsSource for StaticCredentialsSource {
    fn token(&self) -> Result<String, ClientError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_token() {
        let source = StaticCredentialsSource::new("12345");
        assert_eq!(source.token().unwrap(), "12345");
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(
            "".parse::<StaticCredentialsSource>(),
            Err(ClientError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let source = StaticCredentialsSource::new("super-secret");
        assert!(!format!("{source:?}").contains("super-secret"));
    }
}
