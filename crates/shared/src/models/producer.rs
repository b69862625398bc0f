use super::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct ProducerRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub owner: String,
    #[serde(default, deserialize_with = "lenient")]
    pub total_votes: String,
    #[serde(default, deserialize_with = "lenient")]
    pub producer_key: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub unpaid_blocks: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub last_claim_time: String,
    #[serde(default, deserialize_with = "lenient")]
    pub location: u64,
}

/// Body returned by `/v1/chain/get_producers`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct ProducersResponse {
    pub rows: Vec<ProducerRecord>,
}

impl ProducersResponse {
    pub fn into_active(self) -> Vec<ProducerRecord> {
        self.rows.into_iter().filter(|p| p.is_active).collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProducersRequest {
    pub json: bool,
    pub lower_bound: String,
    pub limit: u32,
}

impl ProducersRequest {
    pub fn first_page(limit: u32) -> Self {
        Self {
            json: true,
            lower_bound: String::new(),
            limit,
        }
    }
}

// Nodes report `is_active` either as a boolean or as a 0/1 integer; anything
// else counts as inactive.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}
