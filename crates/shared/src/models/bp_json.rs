use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Well-known path of a producer's self-published metadata document.
pub const BP_JSON_PATH: &str = "bp.json";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct BpLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct BpNode {
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<BpLocation>,
    // Published as a string or as a list of strings depending on the producer
    #[serde(default, deserialize_with = "lenient")]
    pub node_type: Option<Value>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub ssl_endpoint: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub p2p_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct BpJson {
    #[serde(default, deserialize_with = "lenient")]
    pub producer_account_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub producer_public_key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub org: Map<String, Value>,
    pub nodes: Vec<BpNode>,
}

impl BpJson {
    /// Advertised API endpoints: every plaintext endpoint in node order,
    /// followed by every secured endpoint in node order.
    pub fn api_endpoints(&self) -> Vec<String> {
        let plaintext = self.nodes.iter().filter_map(|n| non_empty(&n.api_endpoint));
        let secured = self.nodes.iter().filter_map(|n| non_empty(&n.ssl_endpoint));
        plaintext.chain(secured).collect()
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Metadata document URL for a producer base URL, tolerating a trailing slash.
pub fn bp_json_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}{BP_JSON_PATH}")
    } else {
        format!("{base_url}/{BP_JSON_PATH}")
    }
}
