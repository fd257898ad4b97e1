use std::sync::Arc;

use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use serde_json::Value;

use crate::config::SessionConfig;
use crate::credentials::{CredentialsSource, StaticCredentialsSource};
use crate::error::ClientError;
use crate::retry::RetryPolicy;
use crate::transport::Transport;

const ACCEPT_VALUE: &str = "application/json;q=0.9,text/plain";

trait ResponseExt {
    fn map_to_dar_err(self, url: &str) -> Result<Response, ClientError>;
}

impl ResponseExt for Response {
    fn map_to_dar_err(self, url: &str) -> Result<Response, ClientError> {
        if self.status().is_success() {
            Ok(self)
        } else {
            let status = self.status();
            let body = self
                .text()
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            Err(ClientError::Http {
                status,
                url: url.to_string(),
                body,
            })
        }
    }
}

/// An authenticated HTTPS session with the DAR service.
///
/// Every request carries the bearer token of the configured [CredentialsSource].
/// GET and DELETE requests are always retried according to the configured
/// [RetryPolicy]; POST requests only when the caller asks for it, since they are
/// not guaranteed to be idempotent.
#[derive(Debug, Clone)]
pub struct Session {
    http_client: reqwest::blocking::Client,
    base_url: String,
    credentials_source: Arc<dyn CredentialsSource>,
    retry_policy: RetryPolicy,
}

impl Session {
    pub fn new(
        config: SessionConfig,
        credentials_source: impl CredentialsSource + 'static,
    ) -> Result<Self, ClientError> {
        let base_url = Self::validate_base_url(&config.base_url)?;

        let http_client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Session {
            http_client,
            base_url,
            credentials_source: Arc::new(credentials_source),
            retry_policy: config.retry_policy,
        })
    }

    /// Session for `DAR_URL` authenticated with `DAR_API_TOKEN`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(SessionConfig::from_env()?, StaticCredentialsSource::from_env()?)
    }

    /// Base URL without trailing slash. Endpoints are appended to it verbatim.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials_source(&self) -> &dyn CredentialsSource {
        self.credentials_source.as_ref()
    }

    fn validate_base_url(base_url: &str) -> Result<String, ClientError> {
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "https" {
            return Err(ClientError::HttpsRequired);
        }
        Ok(base_url.trim_end_matches('/').to_string())
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let token = self.credentials_source.token()?;
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::InvalidCredentials(e.to_string()))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("dar-sdk/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        Ok(headers)
    }

    fn policy_for(&self, retry: bool) -> RetryPolicy {
        if retry {
            self.retry_policy.clone()
        } else {
            RetryPolicy::none()
        }
    }

    fn req<F>(
        &self,
        method: Method,
        endpoint: &str,
        retry: bool,
        body: F,
    ) -> Result<Response, ClientError>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url_for(endpoint);

        self.policy_for(retry).run(|attempt| {
            log::debug!("{method} {url} (attempt {})", attempt + 1);
            let request_builder = self
                .http_client
                .request(method.clone(), &url)
                .headers(self.headers()?);
            body(request_builder).send()?.map_to_dar_err(&url)
        })
    }

    pub fn get_from_endpoint(&self, endpoint: &str) -> Result<Response, ClientError> {
        self.req(Method::GET, endpoint, true, |r| r)
    }

    pub fn delete_from_endpoint(&self, endpoint: &str) -> Result<Response, ClientError> {
        self.req(Method::DELETE, endpoint, true, |r| r)
    }

    pub fn post_to_endpoint(
        &self,
        endpoint: &str,
        payload: &Value,
        retry: bool,
    ) -> Result<Response, ClientError> {
        self.req(Method::POST, endpoint, retry, |r| r.json(payload))
    }

    /// POST a raw body, e.g. CSV data for a dataset upload.
    pub fn post_data_to_endpoint(
        &self,
        endpoint: &str,
        data: Vec<u8>,
        retry: bool,
    ) -> Result<Response, ClientError> {
        self.req(Method::POST, endpoint, retry, |r| r.body(data.clone()))
    }
}

impl Transport for Session {
    fn post_json(
        &self,
        endpoint: &str,
        payload: &Value,
        retry: bool,
    ) -> Result<Value, ClientError> {
        decode_json(self.post_to_endpoint(endpoint, payload, retry)?)
    }
}

/// Non-JSON bodies become [ClientError::Decode]; a connection lost while reading stays a transport error.
fn decode_json(response: Response) -> Result<Value, ClientError> {
    Ok(response.json::<Value>()?)
}
