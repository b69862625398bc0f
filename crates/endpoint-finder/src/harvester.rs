use crate::config::FinderConfig;
use log::debug;
use shared::http::{HttpRequest, Transport, TransportError};
use shared::models::bp_json::bp_json_url;
use shared::models::BpJson;
use std::sync::Arc;
use std::time::Duration;

/// Collects the API endpoints a producer advertises in its `bp.json`.
pub struct EndpointHarvester {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl EndpointHarvester {
    pub fn new(transport: Arc<dyn Transport>, config: &FinderConfig) -> Self {
        Self {
            transport,
            timeout: config.request_timeout,
        }
    }

    async fn fetch_bp_json(&self, producer_url: &str) -> Result<BpJson, TransportError> {
        let request = HttpRequest::get(bp_json_url(producer_url), self.timeout);
        let response = self.transport.request(request).await?;
        response.json()
    }

    /// Plaintext endpoints first, then secured ones. Any failure yields an
    /// empty list.
    pub async fn harvest_endpoints(&self, producer_url: &str) -> Vec<String> {
        if producer_url.is_empty() {
            return vec![];
        }

        match self.fetch_bp_json(producer_url).await {
            Ok(bp_json) => {
                let endpoints = bp_json.api_endpoints();
                debug!(
                    "Harvested {} endpoints from {producer_url}",
                    endpoints.len()
                );
                endpoints
            }
            Err(e) => {
                debug!("Failed to harvest endpoints from {producer_url}: {e}");
                vec![]
            }
        }
    }
}
