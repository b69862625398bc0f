pub mod bp_json;
pub mod chain;
pub mod endpoint;
pub mod producer;

pub use bp_json::BpJson;
pub use chain::ChainInfo;
pub use endpoint::RankedEndpoint;
pub use producer::ProducerRecord;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Decodes a field that is carried but never read. A null or wrongly typed
// value falls back to the default instead of failing the whole document.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
