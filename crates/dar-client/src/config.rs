use crate::inference::LIMIT_OBJECTS_PER_CALL;

/// Configuration for the [InferenceClient](crate::InferenceClient).
#[derive(Debug, Clone)]
pub struct InferenceClientConfig {
    /// Maximum number of objects sent in one inference request.
    pub batch_size: usize,
    /// Fail bulk inference when a response does not hold one prediction per object.
    pub verify_prediction_count: bool,
}

impl Default for InferenceClientConfig {
    fn default() -> Self {
        Self {
            batch_size: LIMIT_OBJECTS_PER_CALL,
            verify_prediction_count: false,
        }
    }
}

impl InferenceClientConfig {
    pub fn builder() -> InferenceClientConfigBuilder {
        InferenceClientConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for the InferenceClientConfig
pub struct InferenceClientConfigBuilder {
    config: InferenceClientConfig,
}

impl InferenceClientConfigBuilder {
    /// Set the maximum number of objects per request. The service rejects more than 50.
    pub fn with_batch_size(mut self, batch_size: usize) -> InferenceClientConfigBuilder {
        self.config.batch_size = batch_size;
        self
    }

    pub fn with_prediction_count_verification(
        mut self,
        verify: bool,
    ) -> InferenceClientConfigBuilder {
        self.config.verify_prediction_count = verify;
        self
    }

    pub fn build(self) -> InferenceClientConfig {
        self.config
    }
}
