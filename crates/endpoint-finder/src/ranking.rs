use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::harvester::EndpointHarvester;
use crate::producers::ProducerResolver;
use crate::validator::EndpointValidator;
use futures::future::join_all;
use log::info;
use shared::http::Transport;
use shared::models::RankedEndpoint;
use std::collections::HashSet;
use std::sync::Arc;

/// Discovers, validates and ranks API endpoints.
pub struct EndpointFinder {
    resolver: ProducerResolver,
    harvester: EndpointHarvester,
    validator: EndpointValidator,
    seeds: Vec<String>,
}

impl EndpointFinder {
    pub fn new(transport: Arc<dyn Transport>, config: &FinderConfig) -> Self {
        Self {
            resolver: ProducerResolver::new(transport.clone(), config),
            harvester: EndpointHarvester::new(transport.clone(), config),
            validator: EndpointValidator::new(transport, config),
            seeds: config.seeds.clone(),
        }
    }

    /// Valid endpoints sorted by ascending latency.
    ///
    /// Fails only when no seed can list the producers; every other failure
    /// just drops the affected producer or candidate.
    pub async fn rank(&self) -> Result<Vec<RankedEndpoint>, FinderError> {
        let producers = self.resolver.resolve_producers().await?;

        let harvests: Vec<_> = producers
            .iter()
            .map(|producer| self.harvester.harvest_endpoints(&producer.url))
            .collect();
        let harvested = join_all(harvests).await;

        let candidates = dedupe_candidates(harvested, &self.seeds);
        info!(
            "Validating {} candidate endpoints from {} producers",
            candidates.len(),
            producers.len()
        );

        let probes: Vec<_> = candidates
            .iter()
            .map(|url| self.validator.validate(url))
            .collect();
        let outcomes = join_all(probes).await;

        let ranked = rank_outcomes(candidates, outcomes);
        info!("Found {} valid endpoints", ranked.len());
        Ok(ranked)
    }
}

/// Flattens harvested endpoints, appends the seeds and keeps the first
/// occurrence of every URL.
pub(crate) fn dedupe_candidates(harvested: Vec<Vec<String>>, seeds: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    harvested
        .into_iter()
        .flatten()
        .chain(seeds.iter().cloned())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

// Outcomes line up with candidates by position.
pub(crate) fn rank_outcomes(
    candidates: Vec<String>,
    outcomes: Vec<Option<u64>>,
) -> Vec<RankedEndpoint> {
    let mut ranked: Vec<RankedEndpoint> = candidates
        .into_iter()
        .zip(outcomes)
        .filter_map(|(url, latency)| match latency {
            Some(latency_ms) if latency_ms > 0 => Some(RankedEndpoint { url, latency_ms }),
            _ => None,
        })
        .collect();
    ranked.sort_by_key(|e| e.latency_ms);
    ranked
}
