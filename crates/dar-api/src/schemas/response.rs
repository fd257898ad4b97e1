use serde::{Deserialize, Serialize};

use super::Prediction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResponseSchema {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_time: Option<String>,
    pub predictions: Vec<Prediction>,
}

/// Typed view over a [Prediction].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPrediction {
    #[serde(default)]
    pub object_id: Option<String>,
    pub labels: Vec<LabelPrediction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelPrediction {
    pub name: String,
    /// Candidate values, best first.
    pub results: Vec<PredictionResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub value: String,
    pub probability: f64,
}

impl LabelPrediction {
    pub fn top(&self) -> Option<&PredictionResult> {
        self.results.first()
    }
}

impl ObjectPrediction {
    pub fn label(&self, name: &str) -> Option<&LabelPrediction> {
        self.labels.iter().find(|l| l.name == name)
    }
}

impl TryFrom<&Prediction> for ObjectPrediction {
    type Error = serde_json::Error;

    fn try_from(prediction: &Prediction) -> Result<Self, Self::Error> {
        serde_json::from_value(serde_json::Value::Object(prediction.clone()))
    }
}
