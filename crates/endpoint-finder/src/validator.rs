use crate::config::{FinderConfig, ProbeFixture};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use shared::http::{HttpRequest, Transport, TransportError};
use shared::models::chain::{
    CurrencyBalanceRequest, TransactionLookup, TransactionRequest, GET_CURRENCY_BALANCE_PATH,
    GET_INFO_PATH, GET_TRANSACTION_PATH,
};
use shared::models::ChainInfo;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Reason a candidate endpoint was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProbeFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("chain id mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: String, actual: String },
    #[error("no balance returned for the test account")]
    NoBalance,
    #[error("test transaction not found")]
    TransactionNotFound,
}

/// Probes a candidate against pinned chain state: chain id, an account
/// balance and a historical transaction, in that order.
pub struct EndpointValidator {
    transport: Arc<dyn Transport>,
    timeout: Duration,
    chain_id: String,
    fixture: ProbeFixture,
}

impl EndpointValidator {
    pub fn new(transport: Arc<dyn Transport>, config: &FinderConfig) -> Self {
        Self {
            transport,
            timeout: config.request_timeout,
            chain_id: config.chain_id.clone(),
            fixture: config.probe.clone(),
        }
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: &str,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let request = HttpRequest::post_json(format!("{url}{path}"), body, self.timeout)?;
        self.transport.request(request).await?.json()
    }

    async fn check_chain_id(&self, url: &str) -> Result<(), ProbeFailure> {
        let info: ChainInfo = self.post(url, GET_INFO_PATH, &json!({})).await?;
        if info.chain_id != self.chain_id {
            return Err(ProbeFailure::ChainMismatch {
                expected: self.chain_id.clone(),
                actual: info.chain_id,
            });
        }
        Ok(())
    }

    async fn check_balance(&self, url: &str) -> Result<(), ProbeFailure> {
        let body = CurrencyBalanceRequest {
            code: self.fixture.balance_code.clone(),
            account: self.fixture.balance_account.clone(),
            symbol: self.fixture.balance_symbol.clone(),
        };

        let balances: Vec<Value> = self.post(url, GET_CURRENCY_BALANCE_PATH, &body).await?;
        if balances.is_empty() {
            return Err(ProbeFailure::NoBalance);
        }
        Ok(())
    }

    async fn fetch_transaction(&self, url: &str) -> Result<TransactionLookup, ProbeFailure> {
        let body = TransactionRequest {
            id: self.fixture.transaction_id.clone(),
            block_num_hint: self.fixture.block_num_hint,
        };

        Ok(self.post(url, GET_TRANSACTION_PATH, &body).await?)
    }

    /// Runs the three checks and returns the estimated per-call latency in
    /// milliseconds. The first failing check aborts the rest.
    pub async fn probe(&self, url: &str) -> Result<u64, ProbeFailure> {
        let start = Instant::now();

        self.check_chain_id(url).await?;
        self.check_balance(url).await?;
        let transaction = self.fetch_transaction(url).await?;

        let elapsed = start.elapsed();
        if !transaction.found() {
            return Err(ProbeFailure::TransactionNotFound);
        }
        Ok(latency_per_call(elapsed))
    }

    /// `Some(latency_ms)` for a valid endpoint, `None` otherwise.
    pub async fn validate(&self, url: &str) -> Option<u64> {
        match self.probe(url).await {
            Ok(latency) => Some(latency),
            Err(e) => {
                debug!("Endpoint {url} rejected: {e}");
                None
            }
        }
    }
}

// Rough average over the three sequential calls; never zero for a passing probe.
fn latency_per_call(elapsed: Duration) -> u64 {
    let ms = elapsed.as_secs_f64() * 1000.0;
    ((ms / 3.0).round() as u64).max(1)
}
