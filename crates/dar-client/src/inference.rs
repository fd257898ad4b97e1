use dar_api::schemas::{InferenceRequestSchema, InferenceResponseSchema, Object, Prediction};
use dar_api::{ClientError, InferencePaths, Session, Transport};

use crate::config::InferenceClientConfig;
use crate::error::InferenceError;
use crate::lists::split_list;

/// How many objects can be processed per inference request
pub const LIMIT_OBJECTS_PER_CALL: usize = 50;

/// How many labels to predict for a single object by default
pub const TOP_N: u32 = 1;

/// A client for the inference microservice.
///
/// Holds no state besides its transport and configuration, so a shared client
/// may serve concurrent callers as long as the transport allows it.
#[derive(Debug, Clone)]
pub struct InferenceClient<T> {
    transport: T,
    config: InferenceClientConfig,
}

impl InferenceClient<Session> {
    /// Client over a [Session] configured from `DAR_URL` and `DAR_API_TOKEN`.
    pub fn from_env() -> Result<Self, InferenceError> {
        Ok(Self::new(Session::from_env()?))
    }
}

impl<T: Transport> InferenceClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, InferenceClientConfig::default())
    }

    pub fn with_config(transport: T, config: InferenceClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &InferenceClientConfig {
        &self.config
    }

    /// Performs inference for the given `objects` with `model_name`.
    ///
    /// For each object, the response holds the `top_n` best predictions. The
    /// endpoint accepts at most [LIMIT_OBJECTS_PER_CALL] objects; this is not
    /// checked locally. Use [Self::do_bulk_inference] for larger inputs.
    ///
    /// `retry` lets the transport retry transient failures of this request.
    pub fn create_inference_request(
        &self,
        model_name: &str,
        objects: &[Object],
        top_n: u32,
        retry: bool,
    ) -> Result<InferenceResponseSchema, InferenceError> {
        validate_request_args(model_name, top_n)?;

        log::debug!(
            "Submitting Inference request for model '{model_name}' with '{}' objects and top_n '{top_n}'",
            objects.len()
        );

        let endpoint = InferencePaths::format_inference_endpoint_by_name(model_name);
        let payload = encode_request(top_n, objects)?;

        let body = self
            .transport
            .post_json(&endpoint, &payload, retry)
            .map_err(|e| match e {
                ClientError::Decode(msg) => InferenceError::MalformedResponse(msg),
                other => InferenceError::Transport(other),
            })?;

        let response: InferenceResponseSchema = serde_json::from_value(body)
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        log::debug!("Inference response ID: {}", response.id);
        Ok(response)
    }

    /// Performs bulk inference for collections of any size.
    ///
    /// Splits `objects` into batches of the configured batch size and submits
    /// them one at a time, in order. Returns the predictions of all responses
    /// concatenated in batch order, so the i-th prediction belongs to the i-th
    /// object as long as the service answers in request order.
    ///
    /// The first failing batch aborts the call; predictions of earlier batches
    /// are discarded.
    pub fn do_bulk_inference(
        &self,
        model_name: &str,
        objects: &[Object],
        top_n: u32,
        retry: bool,
    ) -> Result<Vec<Prediction>, InferenceError> {
        validate_request_args(model_name, top_n)?;

        let mut result = Vec::with_capacity(objects.len());
        for work_package in split_list(objects, self.config.batch_size)? {
            let response =
                self.create_inference_request(model_name, work_package, top_n, retry)?;
            self.check_prediction_count(&response, work_package.len())?;
            result.extend(response.predictions);
        }
        Ok(result)
    }

    fn check_prediction_count(
        &self,
        response: &InferenceResponseSchema,
        expected: usize,
    ) -> Result<(), InferenceError> {
        let actual = response.predictions.len();
        if actual == expected {
            return Ok(());
        }
        if self.config.verify_prediction_count {
            return Err(InferenceError::PredictionCountMismatch {
                response_id: response.id.clone(),
                expected,
                actual,
            });
        }
        log::warn!(
            "Inference response {} holds {actual} predictions for {expected} objects",
            response.id
        );
        Ok(())
    }
}

fn encode_request(top_n: u32, objects: &[Object]) -> Result<serde_json::Value, InferenceError> {
    serde_json::to_value(InferenceRequestSchema::new(top_n, objects))
        .map_err(InferenceError::RequestEncoding)
}

fn validate_request_args(model_name: &str, top_n: u32) -> Result<(), InferenceError> {
    if model_name.is_empty() {
        return Err(InferenceError::InvalidArgument(
            "model name cannot be empty".to_string(),
        ));
    }
    if top_n == 0 {
        return Err(InferenceError::InvalidArgument(
            "top_n must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_is_encoded_in_wire_format() {
        let objects = vec![json!({"id": 1}).as_object().unwrap().clone()];

        let payload = encode_request(5, &objects).unwrap();

        assert_eq!(payload, json!({"topN": 5, "objects": [{"id": 1}]}));
    }
}
