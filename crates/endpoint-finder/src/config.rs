use std::time::Duration;

pub const EOS_CHAIN_ID: &str = "aca376f206b8fc25a6ed44dbdc66547c36c6c33e3a119ffbeaef943642f0e906";

pub const TEST_TRANSACTION_ID: &str =
    "596e905f4af9e212aa4683fa209bfb32d1339e869a16b9c0687d4b7fa1ba7c02";
pub const TEST_TRANSACTION_BLOCK_NUM: u64 = 91463041;

pub const TEST_BALANCE_CODE: &str = "eidosonecoin";
pub const TEST_BALANCE_ACCOUNT: &str = "cryptoforest";
pub const TEST_BALANCE_SYMBOL: &str = "EIDOS";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_PRODUCER_LIMIT: u32 = 50;

// Hand-maintained; the duplicate entries are collapsed by candidate deduplication.
pub const BP_SEEDS: &[&str] = &[
    "http://eos.infstones.io",
    "https://eos.infstones.io",
    "http://eos.eoscafeblock.com",
    "https://eos.eoscafeblock.com",
    "https://node.betdice.one",
    "http://api.main.alohaeos.com",
    "http://api-mainnet.starteos.io",
    "https://bp.whaleex.com",
    "https://api.zbeos.com",
    "https://node1.zbeos.com",
    "https://api.main.alohaeos.com",
    "https://api.eoslaomao.com",
    "https://api-mainnet.starteos.io",
    "http://peer2.eoshuobipool.com:8181",
    "http://peer1.eoshuobipool.com:8181",
    "https://api.redpacketeos.com",
    "https://mainnet.eoscannon.io",
];

/// Pinned chain state every candidate must serve.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeFixture {
    pub balance_code: String,
    pub balance_account: String,
    pub balance_symbol: String,
    pub transaction_id: String,
    pub block_num_hint: u64,
}

impl Default for ProbeFixture {
    fn default() -> Self {
        Self {
            balance_code: TEST_BALANCE_CODE.to_string(),
            balance_account: TEST_BALANCE_ACCOUNT.to_string(),
            balance_symbol: TEST_BALANCE_SYMBOL.to_string(),
            transaction_id: TEST_TRANSACTION_ID.to_string(),
            block_num_hint: TEST_TRANSACTION_BLOCK_NUM,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    /// Bootstrap nodes, queried in order for the producer list and always
    /// included as candidates.
    pub seeds: Vec<String>,
    pub request_timeout: Duration,
    pub producer_limit: u32,
    pub chain_id: String,
    pub probe: ProbeFixture,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            seeds: BP_SEEDS.iter().map(|s| s.to_string()).collect(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            producer_limit: DEFAULT_PRODUCER_LIMIT,
            chain_id: EOS_CHAIN_ID.to_string(),
            probe: ProbeFixture::default(),
        }
    }
}

impl FinderConfig {
    pub fn with_seeds(mut self, seeds: Vec<String>) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_producer_limit(mut self, limit: u32) -> Self {
        self.producer_limit = limit;
        self
    }
}
