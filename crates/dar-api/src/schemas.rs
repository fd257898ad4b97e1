//! Wire schemas of the inference service.
//!
//! - [`request`] - payloads sent to the service
//! - [`response`] - payloads received from the service
//!
//! Objects and predictions are opaque JSON records; [`ObjectPrediction`] offers a
//! typed view over a single prediction when its labels are needed.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

/// One item to classify: a mapping of field name to value.
pub type Object = serde_json::Map<String, serde_json::Value>;

/// The service's answer for one [Object].
pub type Prediction = serde_json::Map<String, serde_json::Value>;
