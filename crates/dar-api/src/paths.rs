/// Endpoint paths of the inference microservice.
pub struct InferencePaths;

impl InferencePaths {
    const MODELS_BASE: &'static str = "/inference/api/v3/models";

    /// Path of the inference endpoint for the deployed model `model_name`.
    pub fn format_inference_endpoint_by_name(model_name: &str) -> String {
        format!("{}/{model_name}/versions/1", Self::MODELS_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_inference_endpoint() {
        assert_eq!(
            InferencePaths::format_inference_endpoint_by_name("my-model"),
            "/inference/api/v3/models/my-model/versions/1"
        );
    }
}
