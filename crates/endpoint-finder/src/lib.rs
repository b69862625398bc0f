//! Finds live, correct EOS API endpoints.
//!
//! The active producer set is read from a bootstrap seed, every producer's
//! `bp.json` is harvested for API endpoints, and each candidate (plus the
//! seeds themselves) is probed against pinned mainnet state. Endpoints that
//! pass are returned fastest first.

mod cli;
mod config;
mod error;
mod harvester;
mod producers;
mod ranking;
#[cfg(test)]
mod test_utils;
mod validator;

pub use cli::Cli;
pub use config::{
    FinderConfig, ProbeFixture, BP_SEEDS, DEFAULT_PRODUCER_LIMIT, DEFAULT_REQUEST_TIMEOUT,
    EOS_CHAIN_ID, TEST_BALANCE_ACCOUNT, TEST_BALANCE_CODE, TEST_BALANCE_SYMBOL,
    TEST_TRANSACTION_BLOCK_NUM, TEST_TRANSACTION_ID,
};
pub use error::FinderError;
pub use harvester::EndpointHarvester;
pub use producers::ProducerResolver;
pub use ranking::EndpointFinder;
pub use shared::models::RankedEndpoint;
pub use validator::{EndpointValidator, ProbeFailure};

use shared::http::HttpTransport;
use std::sync::Arc;

/// Ranks the EOS mainnet API endpoints using the built-in seeds and probes.
pub async fn get_api_endpoints() -> Result<Vec<RankedEndpoint>, FinderError> {
    get_api_endpoints_with(&FinderConfig::default()).await
}

pub async fn get_api_endpoints_with(
    config: &FinderConfig,
) -> Result<Vec<RankedEndpoint>, FinderError> {
    let transport =
        HttpTransport::new().map_err(|e| FinderError::ClientInit(e.to_string()))?;
    EndpointFinder::new(Arc::new(transport), config).rank().await
}
