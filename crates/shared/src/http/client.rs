use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use log::trace;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// reqwest-backed transport.
///
/// Certificate validation is disabled: producer nodes commonly serve
/// self-signed or mismatched certificates.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        trace!("{:?} {}", request.method, request.url);

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .timeout(request.timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(e.to_string())
    }
}
