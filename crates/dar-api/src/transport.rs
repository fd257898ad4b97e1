use std::sync::Arc;

use serde_json::Value;

use crate::error::ClientError;

/// The narrow view of the HTTP session that the inference client relies on.
pub trait Transport {
    /// POST `payload` as JSON to `endpoint` and decode the JSON answer.
    ///
    /// With `retry` set, transient failures are retried according to the
    /// implementation's policy before the final error is returned.
    fn post_json(&self, endpoint: &str, payload: &Value, retry: bool)
    -> Result<Value, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(
        &self,
        endpoint: &str,
        payload: &Value,
        retry: bool,
    ) -> Result<Value, ClientError> {
        (**self).post_json(endpoint, payload, retry)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn post_json(
        &self,
        endpoint: &str,
        payload: &Value,
        retry: bool,
    ) -> Result<Value, ClientError> {
        (**self).post_json(endpoint, payload, retry)
    }
}
