use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// What can go wrong talking to the backend. Every variant is terminal for
/// the current attempt; retries happen only when the user re-triggers the
/// read or resubmits the edit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Seam between the controllers and the wire. Production uses reqwest; tests
/// substitute a scripted fake.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
    async fn patch_json(&self, url: &str, body: &Value) -> Result<Value, FetchError>;
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn decode_body(response: reqwest::Response) -> Result<Value, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::decode_body(response).await
    }

    async fn patch_json(&self, url: &str, body: &Value) -> Result<Value, FetchError> {
        let response = self
            .client
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::decode_body(response).await
    }
}
