pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod paths;
pub mod retry;
pub mod schemas;
pub mod transport;

pub use client::Session;
pub use config::{SessionConfig, SessionConfigBuilder};
pub use credentials::{CredentialsSource, StaticCredentialsSource};
pub use error::ClientError;
pub use paths::InferencePaths;
pub use reqwest::StatusCode;
pub use retry::RetryPolicy;
pub use transport::Transport;
