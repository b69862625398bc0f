use async_trait::async_trait;
use serde_json::Value;
use shared::http::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

struct Scripted {
    result: Result<HttpResponse, TransportError>,
    delay: Duration,
}

/// In-memory transport answering from a fixed script keyed by method and URL.
/// Unscripted requests fail with a connection error.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    routes: HashMap<(Method, String), Scripted>,
    calls: Mutex<Vec<(Method, String)>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn json(self, method: Method, url: &str, body: Value) -> Self {
        self.json_delayed(method, url, body, Duration::ZERO)
    }

    pub(crate) fn json_delayed(
        mut self,
        method: Method,
        url: &str,
        body: Value,
        delay: Duration,
    ) -> Self {
        let response = HttpResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: body.to_string().into_bytes(),
        };
        self.routes.insert(
            (method, url.to_string()),
            Scripted {
                result: Ok(response),
                delay,
            },
        );
        self
    }

    pub(crate) fn status(mut self, method: Method, url: &str, status: u16) -> Self {
        let response = HttpResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: br#"{"code": 500, "message": "Internal Service Error"}"#.to_vec(),
        };
        self.routes.insert(
            (method, url.to_string()),
            Scripted {
                result: Ok(response),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub(crate) fn fail(mut self, method: Method, url: &str, error: TransportError) -> Self {
        self.routes.insert(
            (method, url.to_string()),
            Scripted {
                result: Err(error),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub(crate) fn calls(&self) -> Vec<(Method, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_to(&self, url: &str) -> usize {
        self.calls().iter().filter(|(_, u)| u == url).count()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.method, request.url.clone()));

        match self.routes.get(&(request.method, request.url.clone())) {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.result.clone()
            }
            None => Err(TransportError::Connection(format!(
                "no route scripted for {}",
                request.url
            ))),
        }
    }
}
