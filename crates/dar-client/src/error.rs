use dar_api::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Could not encode inference request: {0}")]
    RequestEncoding(serde_json::Error),
    #[error("Transport error: {0}")]
    Transport(#[from] ClientError),
    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),
    #[error("Inference response {response_id} holds {actual} predictions for {expected} objects")]
    PredictionCountMismatch {
        response_id: String,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_failure_is_not_a_transport_error() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        let error = InferenceError::RequestEncoding(cause);

        assert!(!matches!(error, InferenceError::Transport(_)));
        assert!(error.to_string().starts_with("Could not encode inference request"));
    }
}
