//! Network entities for the wallet core

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::WalletError;
use crate::shared::types::{GasBudget, NetworkId};

/// Effective endpoint and feature configuration for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub id: NetworkId,
    pub name: String,
    pub query_rpc_url: String,
    pub tx_rpc_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql_url: Option<String>,
    pub version_cache_timeout_seconds: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_call_gas_budget: Option<GasBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stake_gas_budget: Option<GasBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_coin_gas_budget: Option<GasBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_staking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_swap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_buy_crypto: Option<bool>,
    #[serde(rename = "enableMintExampleNFT", default, skip_serializing_if = "Option::is_none")]
    pub enable_mint_example_nft: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet_api: Option<String>,
}

impl NetworkConfig {
    /// Network whose query and transaction endpoints share one node URL
    pub fn new(id: &str, node_url: &str, graphql_url: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            query_rpc_url: node_url.to_string(),
            tx_rpc_url: node_url.to_string(),
            graphql_url: graphql_url.map(str::to_string),
            version_cache_timeout_seconds: crate::shared::constants::DEFAULT_VERSION_CACHE_TIMEOUT_SECONDS,
            move_call_gas_budget: None,
            stake_gas_budget: None,
            pay_coin_gas_budget: None,
            enable_staking: None,
            enable_swap: None,
            enable_buy_crypto: None,
            enable_mint_example_nft: None,
            faucet_api: None,
        }
    }

    pub fn with_faucet_api(mut self, faucet_api: &str) -> Self {
        self.faucet_api = Some(faucet_api.to_string());
        self
    }
}

/// Per-network entry of the remote feature-flag document.
///
/// Every field is optional; only the ones present are laid over the built-in
/// defaults. Fields are decoded one at a time, so a field of the wrong type is
/// dropped on its own and never takes the rest of the entry with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RemoteNetworkOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_node_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_cache_timeout_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake_gas_budget: Option<GasBudget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_call_gas_budget: Option<GasBudget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_coin_gas_budget: Option<GasBudget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_staking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_swap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_buy_crypto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_mint_example_nft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faucet_api: Option<String>,
}

/// Remote documents in the wild carry this misspelling
const LEGACY_TIMEOUT_KEY: &str = "version_cache_timout_in_seconds";

fn lenient_field<T>(entry: &Value, key: &str, extract: impl Fn(&Value) -> Option<T>) -> Option<T> {
    match entry.get(key) {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let parsed = extract(raw);
            if parsed.is_none() {
                warn!("Ignoring feature flag {} with unexpected value {}", key, raw);
            }
            parsed
        }
    }
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    lenient_field(entry, key, |raw| raw.as_str().map(str::to_string))
}

fn u64_field(entry: &Value, key: &str) -> Option<u64> {
    lenient_field(entry, key, Value::as_u64)
}

fn bool_field(entry: &Value, key: &str) -> Option<bool> {
    lenient_field(entry, key, Value::as_bool)
}

impl RemoteNetworkOverride {
    /// Decode an entry field by field; anything that is not an object yields `None`
    pub fn from_value(entry: &Value) -> Option<Self> {
        if !entry.is_object() {
            return None;
        }

        Some(Self {
            full_node_url: string_field(entry, "full_node_url"),
            graphql_url: string_field(entry, "graphql_url"),
            version_cache_timeout_in_seconds: u64_field(entry, "version_cache_timeout_in_seconds")
                .or_else(|| u64_field(entry, LEGACY_TIMEOUT_KEY)),
            stake_gas_budget: u64_field(entry, "stake_gas_budget"),
            move_call_gas_budget: u64_field(entry, "move_call_gas_budget"),
            pay_coin_gas_budget: u64_field(entry, "pay_coin_gas_budget"),
            enable_staking: bool_field(entry, "enable_staking"),
            enable_swap: bool_field(entry, "enable_swap"),
            enable_buy_crypto: bool_field(entry, "enable_buy_crypto"),
            enable_mint_example_nft: bool_field(entry, "enable_mint_example_nft"),
            faucet_api: string_field(entry, "faucet_api"),
        })
    }

    /// Node URL, if the entry carries a usable one
    pub fn node_url(&self) -> Option<&str> {
        self.full_node_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl From<Value> for RemoteNetworkOverride {
    fn from(value: Value) -> Self {
        Self::from_value(&value).unwrap_or_default()
    }
}

/// Remotely served feature flags.
///
/// Decoding never fails on shape: a `networks` field that is not an object
/// becomes an empty map and entries that are not objects are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct FeatureFlagDocument {
    pub networks: HashMap<NetworkId, RemoteNetworkOverride>,
}

impl FeatureFlagDocument {
    pub fn from_value(value: &Value) -> Self {
        let Some(entries) = value.get("networks").and_then(Value::as_object) else {
            return Self::default();
        };

        let networks = entries
            .iter()
            .filter_map(|(id, entry)| match RemoteNetworkOverride::from_value(entry) {
                Some(parsed) => Some((id.clone(), parsed)),
                None => {
                    warn!("Ignoring malformed feature flags for network {}", id);
                    None
                }
            })
            .collect();

        Self { networks }
    }

    /// Parse a document from JSON text; only non-JSON input is an error
    pub fn from_json_str(text: &str) -> Result<Self, WalletError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    pub fn network(&self, network_id: &str) -> Option<&RemoteNetworkOverride> {
        self.networks.get(network_id)
    }

    pub fn has_networks(&self) -> bool {
        !self.networks.is_empty()
    }
}

impl From<Value> for FeatureFlagDocument {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_config_wire_names() {
        let mut config = NetworkConfig::new("devnet", "https://devnet.suiet.app", None);
        config.enable_mint_example_nft = Some(true);

        let value = serde_json::to_value(&config).expect("Failed to serialize network");
        assert_eq!(value["queryRpcUrl"], "https://devnet.suiet.app");
        assert_eq!(value["versionCacheTimeoutSeconds"], 0);
        assert_eq!(value["enableMintExampleNFT"], true);
        assert!(value.get("graphqlUrl").is_none());
    }

    #[test]
    fn test_feature_flags_decoding() {
        let doc = FeatureFlagDocument::from_value(&json!({
            "networks": {
                "testnet": {
                    "full_node_url": "https://x",
                    "version_cache_timout_in_seconds": 30,
                    "enable_swap": true,
                    "unrelated": "ignored"
                }
            }
        }));

        let testnet = doc.network("testnet").expect("testnet entry missing");
        assert_eq!(testnet.node_url(), Some("https://x"));
        assert_eq!(testnet.version_cache_timeout_in_seconds, Some(30));
        assert_eq!(testnet.enable_swap, Some(true));
        assert_eq!(testnet.graphql_url, None);
    }

    #[test]
    fn test_feature_flags_tolerates_bad_shapes() {
        assert!(!FeatureFlagDocument::from_value(&json!(null)).has_networks());
        assert!(!FeatureFlagDocument::from_value(&json!({ "networks": [1, 2] })).has_networks());
        assert!(!FeatureFlagDocument::from_value(&json!({ "networks": "devnet" })).has_networks());

        let doc = FeatureFlagDocument::from_value(&json!({
            "networks": {
                "devnet": { "full_node_url": 12 },
                "testnet": "https://t",
                "mainnet": { "full_node_url": "https://m" }
            }
        }));
        let devnet = doc.network("devnet").expect("devnet entry missing");
        assert_eq!(devnet.node_url(), None);
        assert!(doc.network("testnet").is_none());
        assert!(doc.network("mainnet").is_some());
    }

    #[test]
    fn test_mistyped_field_keeps_rest_of_entry() {
        let doc = FeatureFlagDocument::from_value(&json!({
            "networks": {
                "testnet": {
                    "full_node_url": "https://x",
                    "stake_gas_budget": "1000",
                    "enable_staking": "yes",
                    "move_call_gas_budget": 2000
                }
            }
        }));

        let testnet = doc.network("testnet").expect("testnet entry missing");
        assert_eq!(testnet.node_url(), Some("https://x"));
        assert_eq!(testnet.stake_gas_budget, None);
        assert_eq!(testnet.enable_staking, None);
        assert_eq!(testnet.move_call_gas_budget, Some(2000));
    }

    #[test]
    fn test_both_timeout_spellings_present() {
        let doc = FeatureFlagDocument::from_value(&json!({
            "networks": {
                "devnet": {
                    "full_node_url": "https://d",
                    "version_cache_timeout_in_seconds": 60,
                    "version_cache_timout_in_seconds": 30
                },
                "testnet": {
                    "version_cache_timeout_in_seconds": "sixty",
                    "version_cache_timout_in_seconds": 30
                }
            }
        }));

        let devnet = doc.network("devnet").expect("devnet entry missing");
        assert_eq!(devnet.node_url(), Some("https://d"));
        assert_eq!(devnet.version_cache_timeout_in_seconds, Some(60));

        let testnet = doc.network("testnet").expect("testnet entry missing");
        assert_eq!(testnet.version_cache_timeout_in_seconds, Some(30));
    }

    #[test]
    fn test_feature_flags_from_json_str() {
        let doc = FeatureFlagDocument::from_json_str(r#"{"networks":{"devnet":{}}}"#)
            .expect("Failed to parse flags");
        assert!(doc.has_networks());
        assert_eq!(doc.network("devnet").and_then(|n| n.node_url()), None);

        assert!(matches!(
            FeatureFlagDocument::from_json_str("not json"),
            Err(WalletError::Serialization(_))
        ));
    }

    #[test]
    fn test_empty_node_url_is_unusable() {
        let entry = RemoteNetworkOverride {
            full_node_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(entry.node_url(), None);
    }

    #[test]
    fn test_feature_flags_deserialize_through_serde() {
        let doc: FeatureFlagDocument = serde_json::from_str(r#"{"networks": 5}"#)
            .expect("Failed to deserialize flags");
        assert!(!doc.has_networks());

        let entry: RemoteNetworkOverride =
            serde_json::from_str(r#"{"full_node_url":"https://x","pay_coin_gas_budget":-1}"#)
                .expect("Failed to deserialize entry");
        assert_eq!(entry.node_url(), Some("https://x"));
        assert_eq!(entry.pay_coin_gas_budget, None);
    }
}
