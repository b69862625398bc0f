mod client;

pub use client::HttpTransport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
            timeout,
        }
    }

    pub fn post(url: impl Into<String>, body: Value, timeout: Duration) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
            timeout,
        }
    }

    pub fn post_json<T: Serialize>(
        url: impl Into<String>,
        body: &T,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        Ok(Self::post(url, body, timeout))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Decodes the body, accepting only a `200` answer served as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        if self.status != 200 {
            return Err(TransportError::UnexpectedStatus(self.status));
        }
        match self.content_type.as_deref() {
            Some(ct) if ct.starts_with("application/json") => {}
            other => {
                return Err(TransportError::UnexpectedContentType(
                    other.unwrap_or_default().to_string(),
                ))
            }
        }
        serde_json::from_slice(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    #[error("unexpected content type: {0:?}")]
    UnexpectedContentType(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Issues a single HTTP request and reports what came back.
///
/// Implementations enforce `HttpRequest::timeout` and do not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
