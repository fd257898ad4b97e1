//! Client for the inference microservice of the DAR service.
//!
//! [`InferenceClient::create_inference_request`] classifies up to
//! [`LIMIT_OBJECTS_PER_CALL`] objects in one request.
//! [`InferenceClient::do_bulk_inference`] lifts that limit by splitting the input
//! into batches, sending them one after the other and concatenating the
//! predictions in input order.
pub mod config;
pub mod error;
pub mod inference;
pub mod lists;

pub use config::{InferenceClientConfig, InferenceClientConfigBuilder};
pub use error::InferenceError;
pub use inference::{InferenceClient, LIMIT_OBJECTS_PER_CALL, TOP_N};
pub use lists::split_list;

pub use dar_api::schemas::{InferenceResponseSchema, Object, ObjectPrediction, Prediction};
pub use dar_api::{Session, SessionConfig, StaticCredentialsSource, Transport};
