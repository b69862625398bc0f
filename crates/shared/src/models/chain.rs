use serde::{Deserialize, Serialize};

pub const GET_PRODUCERS_PATH: &str = "/v1/chain/get_producers";
pub const GET_INFO_PATH: &str = "/v1/chain/get_info";
pub const GET_CURRENCY_BALANCE_PATH: &str = "/v1/chain/get_currency_balance";
pub const GET_TRANSACTION_PATH: &str = "/v1/history/get_transaction";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct ChainInfo {
    pub chain_id: String,
    #[serde(default)]
    pub head_block_num: Option<u64>,
    #[serde(default)]
    pub server_version_string: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrencyBalanceRequest {
    pub code: String,
    pub account: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionRequest {
    pub id: String,
    pub block_num_hint: u64,
}

/// Only the identifying fields of a `get_transaction` answer are kept.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct TransactionLookup {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

impl TransactionLookup {
    pub fn found(&self) -> bool {
        [&self.id, &self.transaction_id]
            .iter()
            .any(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
    }
}
