use crate::config::FinderConfig;
use crate::error::FinderError;
use log::{info, warn};
use shared::http::{HttpRequest, Transport, TransportError};
use shared::models::chain::GET_PRODUCERS_PATH;
use shared::models::producer::{ProducersRequest, ProducersResponse};
use shared::models::ProducerRecord;
use std::sync::Arc;
use std::time::Duration;

/// Finds the active producer set by asking the bootstrap seeds one at a time.
pub struct ProducerResolver {
    transport: Arc<dyn Transport>,
    seeds: Vec<String>,
    limit: u32,
    timeout: Duration,
}

impl ProducerResolver {
    pub fn new(transport: Arc<dyn Transport>, config: &FinderConfig) -> Self {
        Self {
            transport,
            seeds: config.seeds.clone(),
            limit: config.producer_limit,
            timeout: config.request_timeout,
        }
    }

    async fn fetch_from_seed(&self, seed: &str) -> Result<Vec<ProducerRecord>, TransportError> {
        let request = HttpRequest::post_json(
            format!("{seed}{GET_PRODUCERS_PATH}"),
            &ProducersRequest::first_page(self.limit),
            self.timeout,
        )?;

        let response = self.transport.request(request).await?;
        let producers: ProducersResponse = response.json()?;
        Ok(producers.into_active())
    }

    /// Returns the active producers reported by the first seed that answers.
    ///
    /// Seeds are tried strictly in order; later seeds are never contacted once
    /// one succeeds.
    pub async fn resolve_producers(&self) -> Result<Vec<ProducerRecord>, FinderError> {
        let mut last_error: Option<String> = None;

        for seed in &self.seeds {
            match self.fetch_from_seed(seed).await {
                Ok(producers) => {
                    info!("Resolved {} active producers from {seed}", producers.len());
                    return Ok(producers);
                }
                Err(e) => {
                    warn!("Seed {seed} failed to list producers: {e}");
                    last_error = Some(e.to_string());
                }
            }
        }

        Err(FinderError::SourceExhausted {
            attempted: self.seeds.len(),
            last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedTransport;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use shared::http::{HttpTransport, Method};

    fn config(seeds: &[&str]) -> FinderConfig {
        FinderConfig::default().with_seeds(seeds.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test]
    async fn test_first_seed_times_out_second_answers() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .fail(
                    Method::Post,
                    "http://seed1.example/v1/chain/get_producers",
                    TransportError::Timeout,
                )
                .json(
                    Method::Post,
                    "http://seed2.example/v1/chain/get_producers",
                    json!({"rows": [{"owner": "a", "is_active": true, "url": "http://a.example"}]}),
                ),
        );
        let resolver = ProducerResolver::new(
            transport.clone(),
            &config(&["http://seed1.example", "http://seed2.example"]),
        );

        let producers = resolver.resolve_producers().await.unwrap();

        assert_eq!(producers.len(), 1);
        assert_eq!(producers[0].owner, "a");
        assert_eq!(producers[0].url, "http://a.example");
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_stops_at_first_successful_seed() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .json(
                    Method::Post,
                    "http://seed1.example/v1/chain/get_producers",
                    json!({"rows": []}),
                )
                .json(
                    Method::Post,
                    "http://seed2.example/v1/chain/get_producers",
                    json!({"rows": [{"owner": "b", "is_active": true, "url": "http://b.example"}]}),
                ),
        );
        let resolver = ProducerResolver::new(
            transport.clone(),
            &config(&["http://seed1.example", "http://seed2.example"]),
        );

        let producers = resolver.resolve_producers().await.unwrap();

        assert!(producers.is_empty());
        assert_eq!(
            transport.calls_to("http://seed2.example/v1/chain/get_producers"),
            0
        );
    }

    #[tokio::test]
    async fn test_only_active_producers_are_returned() {
        let transport = Arc::new(ScriptedTransport::new().json(
            Method::Post,
            "http://seed.example/v1/chain/get_producers",
            json!({"rows": [
                {"owner": "a", "is_active": 1, "url": "http://a.example"},
                {"owner": "b", "is_active": 0, "url": "http://b.example"},
                {"owner": "c", "is_active": true, "url": "http://c.example"},
                {"owner": "d", "is_active": false, "url": "http://d.example"}
            ]}),
        ));
        let resolver = ProducerResolver::new(transport, &config(&["http://seed.example"]));

        let producers = resolver.resolve_producers().await.unwrap();

        assert!(producers.iter().all(|p| p.is_active));
        let owners: Vec<_> = producers.iter().map(|p| p.owner.as_str()).collect();
        assert_eq!(owners, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_row_with_null_url_keeps_the_seed_answer() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .json(
                    Method::Post,
                    "http://seed1.example/v1/chain/get_producers",
                    json!({"rows": [
                        {"owner": "a", "is_active": 1, "url": "http://a.example"},
                        {"owner": "b", "is_active": 1, "url": null},
                        {"owner": "c", "is_active": 1, "url": "http://c.example", "location": "DE"}
                    ]}),
                )
                .json(
                    Method::Post,
                    "http://seed2.example/v1/chain/get_producers",
                    json!({"rows": [{"owner": "z", "is_active": 1, "url": "http://z.example"}]}),
                ),
        );
        let resolver = ProducerResolver::new(
            transport.clone(),
            &config(&["http://seed1.example", "http://seed2.example"]),
        );

        let producers = resolver.resolve_producers().await.unwrap();

        let urls: Vec<_> = producers.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["http://a.example", "", "http://c.example"]);
        assert_eq!(
            transport.calls_to("http://seed2.example/v1/chain/get_producers"),
            0
        );
    }

    #[tokio::test]
    async fn test_all_seeds_failing_is_source_exhausted() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .status(Method::Post, "http://seed1.example/v1/chain/get_producers", 500)
                .status(Method::Post, "http://seed2.example/v1/chain/get_producers", 500),
        );
        let resolver = ProducerResolver::new(
            transport,
            &config(&["http://seed1.example", "http://seed2.example"]),
        );

        let err = resolver.resolve_producers().await.unwrap_err();

        assert_eq!(
            err,
            FinderError::SourceExhausted {
                attempted: 2,
                last_error: Some(TransportError::UnexpectedStatus(500).to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_moves_to_next_seed() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .json(
                    Method::Post,
                    "http://seed1.example/v1/chain/get_producers",
                    json!({"producers": []}),
                )
                .json(
                    Method::Post,
                    "http://seed2.example/v1/chain/get_producers",
                    json!({"rows": [{"owner": "z", "is_active": true, "url": "http://z.example"}]}),
                ),
        );
        let resolver = ProducerResolver::new(
            transport,
            &config(&["http://seed1.example", "http://seed2.example"]),
        );

        let producers = resolver.resolve_producers().await.unwrap();
        assert_eq!(producers[0].owner, "z");
    }

    #[tokio::test]
    async fn test_producer_query_over_http() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chain/get_producers")
            .match_body(Matcher::Json(json!({
                "json": true,
                "lower_bound": "",
                "limit": 50
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"rows": [{"owner": "eosnewyorkio", "total_votes": "1.0", "is_active": 1, "url": "https://bp.eosnewyork.io"}], "total_producer_vote_weight": "2.0", "more": ""}"#,
            )
            .create_async()
            .await;

        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new().unwrap());
        let resolver = ProducerResolver::new(transport, &config(&[server.url().as_str()]));

        let producers = resolver.resolve_producers().await.unwrap();

        mock.assert_async().await;
        assert_eq!(producers.len(), 1);
        assert_eq!(producers[0].url, "https://bp.eosnewyork.io");
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_a_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chain/get_producers")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(r#"{"rows": []}"#)
            .create_async()
            .await;

        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new().unwrap());
        let resolver = ProducerResolver::new(transport, &config(&[server.url().as_str()]));

        let result = resolver.resolve_producers().await;
        assert!(matches!(
            result,
            Err(FinderError::SourceExhausted { attempted: 1, .. })
        ));
    }
}
