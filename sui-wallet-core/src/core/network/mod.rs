//! Network configuration resolution
//!
//! Built-in endpoints for every supported network, with per-network overrides
//! from the remote feature-flag document laid on top. Resolution is total:
//! unknown ids fall back to mainnet and unusable overrides are ignored.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;

use crate::domain::{FeatureFlagDocument, NetworkConfig, NetworkRepository, RemoteNetworkOverride};
use crate::shared::constants::{DEVNET, LOCAL, LOCALNET, MAINNET, SUPPORTED_NETWORKS, TESTNET};

lazy_static! {
    static ref MAINNET_CONFIG: NetworkConfig = NetworkConfig::new(
        MAINNET,
        "https://mainnet.suiet.app",
        Some("https://mainnet.suiet.app/query"),
    );
    static ref BUILT_IN_NETWORKS: HashMap<&'static str, NetworkConfig> = {
        let mut networks = HashMap::new();
        networks.insert(
            DEVNET,
            NetworkConfig::new(DEVNET, "https://devnet.suiet.app", Some("https://devnet.suiet.app/query")),
        );
        networks.insert(
            TESTNET,
            NetworkConfig::new(TESTNET, "https://testnet.suiet.app", Some("https://testnet.suiet.app/query")),
        );
        networks.insert(MAINNET, MAINNET_CONFIG.clone());
        networks.insert(LOCAL, NetworkConfig::new(LOCAL, "http://localhost:5001", None));
        networks.insert(
            LOCALNET,
            NetworkConfig::new(LOCALNET, "http://127.0.0.1:9000", Some("http://127.0.0.1:9125"))
                .with_faucet_api("http://127.0.0.1:9123/gas"),
        );
        networks
    };
}

/// Built-in configuration for `network_id`, if there is one
pub fn built_in_network(network_id: &str) -> Option<&'static NetworkConfig> {
    BUILT_IN_NETWORKS.get(network_id)
}

/// Built-in configuration for `network_id`, falling back to mainnet
pub fn default_network(network_id: &str) -> &'static NetworkConfig {
    built_in_network(network_id).unwrap_or(&*MAINNET_CONFIG)
}

fn overlay<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}

/// Lay the fields present in `remote` over `base`.
///
/// `node_url` replaces both RPC endpoints; fields `remote` leaves unset keep
/// the value from `base`.
pub fn apply_override(
    base: &NetworkConfig,
    network_id: &str,
    node_url: &str,
    remote: &RemoteNetworkOverride,
) -> NetworkConfig {
    let mut config = base.clone();
    config.id = network_id.to_string();
    config.name = network_id.to_string();
    config.query_rpc_url = node_url.to_string();
    config.tx_rpc_url = node_url.to_string();

    overlay(&mut config.graphql_url, &remote.graphql_url);
    if let Some(timeout) = remote.version_cache_timeout_in_seconds {
        config.version_cache_timeout_seconds = timeout;
    }
    overlay(&mut config.stake_gas_budget, &remote.stake_gas_budget);
    overlay(&mut config.move_call_gas_budget, &remote.move_call_gas_budget);
    overlay(&mut config.pay_coin_gas_budget, &remote.pay_coin_gas_budget);
    overlay(&mut config.enable_staking, &remote.enable_staking);
    overlay(&mut config.enable_swap, &remote.enable_swap);
    overlay(&mut config.enable_buy_crypto, &remote.enable_buy_crypto);
    overlay(&mut config.enable_mint_example_nft, &remote.enable_mint_example_nft);
    config
}

/// Effective configuration for `network_id` given the current feature flags
pub fn resolve(network_id: &str, flags: Option<&FeatureFlagDocument>) -> NetworkConfig {
    let base = default_network(network_id);

    let Some(flags) = flags.filter(|flags| flags.has_networks()) else {
        return base.clone();
    };

    match flags.network(network_id) {
        Some(remote) => match remote.node_url() {
            Some(node_url) => {
                debug!("Applying remote overrides for network {}", network_id);
                apply_override(base, network_id, node_url, remote)
            }
            None => {
                debug!("Remote entry for {} has no node URL, using defaults", network_id);
                base.clone()
            }
        },
        None => base.clone(),
    }
}

/// Catalogue backed by the built-in network table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltInNetworks;

impl NetworkRepository for BuiltInNetworks {
    /// Every built-in network is enabled, so `enabled_only` does not filter anything
    fn get_networks(&self, _enabled_only: bool) -> Vec<NetworkConfig> {
        SUPPORTED_NETWORKS
            .iter()
            .filter_map(|id| built_in_network(id).cloned())
            .collect()
    }

    fn get_network(&self, network_id: &str) -> Option<NetworkConfig> {
        built_in_network(network_id).cloned()
    }
}

/// Memoized resolver for the currently selected network.
///
/// Returns the same `Arc` while the requested id and flag document are unchanged.
#[derive(Debug, Default)]
pub struct NetworkSelector {
    last: Option<(String, Option<FeatureFlagDocument>, Arc<NetworkConfig>)>,
}

impl NetworkSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, network_id: &str, flags: Option<&FeatureFlagDocument>) -> Arc<NetworkConfig> {
        if let Some((last_id, last_flags, config)) = &self.last {
            if last_id == network_id && last_flags.as_ref() == flags {
                return Arc::clone(config);
            }
        }

        let config = Arc::new(resolve(network_id, flags));
        self.last = Some((network_id.to_string(), flags.cloned(), Arc::clone(&config)));
        config
    }
}
