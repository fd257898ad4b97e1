use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("URL must use https scheme. Unencrypted connections are not supported.")]
    HttpsRequired,
    #[error("Invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("Http error {status} for {url}: {body}")]
    Http {
        status: StatusCode,
        url: String,
        body: String,
    },
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Could not decode response body: {0}")]
    Decode(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            ClientError::Connection(error.to_string())
        } else if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Request(error.to_string())
        }
    }
}

impl ClientError {
    /// Status code of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_login_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_message_is_stable() {
        assert_eq!(
            ClientError::HttpsRequired.to_string(),
            "URL must use https scheme. Unencrypted connections are not supported."
        );
    }

    #[test]
    fn http_error_exposes_status() {
        let error = ClientError::Http {
            status: StatusCode::FORBIDDEN,
            url: "https://dar.example.com/model-manager/api/v3/models".to_string(),
            body: "nope".to_string(),
        };

        assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
        assert!(error.is_login_error());
        assert!(!ClientError::Connection("refused".into()).is_login_error());
    }
}
