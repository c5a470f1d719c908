//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Coin constants
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";
pub const SUI_TYPE_MARKER: &str = "::sui::SUI";
pub const FRAMEWORK_ADDRESS_PREFIX: &str = "0x2::";
pub const SUI_ICON_URL: &str = "https://sui.io/sui-icon.svg";
pub const SUI_DECIMALS: u8 = 9;
pub const DEFAULT_COIN_DECIMALS: u8 = 6;
pub const UNKNOWN_COIN_SYMBOL: &str = "UNKNOWN";
pub const ZERO_BALANCE: &str = "0";

// Network identifiers
pub const DEVNET: &str = "devnet";
pub const TESTNET: &str = "testnet";
pub const MAINNET: &str = "mainnet";
pub const LOCALNET: &str = "localnet";
/// Legacy alias kept for older stored selections
pub const LOCAL: &str = "local";
pub const DEFAULT_NETWORK_ID: &str = MAINNET;

// Supported networks, in display order
pub const SUPPORTED_NETWORKS: &[&str] = &[DEVNET, TESTNET, MAINNET, LOCAL, LOCALNET];

pub const DEFAULT_VERSION_CACHE_TIMEOUT_SECONDS: u64 = 0;

// Faucet and dashboard constants
pub const FAUCET_URL_TEMPLATE: &str = "https://faucet.{network}.sui.io/gas";
pub const AIRDROP_COOLDOWN_MS: i64 = 5000;
pub const BUY_CRYPTO_URL: &str = "https://pay.suiet.app/";

// Query polling
pub const COINS_POLL_INTERVAL_MS: u64 = 5000;

// Configuration
pub const ENV_PREFIX: &str = "WALLET_CORE";
pub const CONFIG_PATH_ENV: &str = "WALLET_CORE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "wallet-core.toml";
pub const LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_networks() {
        assert!(SUPPORTED_NETWORKS.contains(&"devnet"));
        assert!(SUPPORTED_NETWORKS.contains(&"testnet"));
        assert!(SUPPORTED_NETWORKS.contains(&"mainnet"));
        assert!(SUPPORTED_NETWORKS.contains(&"localnet"));
        assert!(SUPPORTED_NETWORKS.contains(&"local"));
        assert_eq!(SUPPORTED_NETWORKS.len(), 5);
    }

    #[test]
    fn test_sui_coin_constants() {
        assert!(SUI_COIN_TYPE.ends_with(SUI_TYPE_MARKER));
        assert!(SUI_COIN_TYPE.starts_with(FRAMEWORK_ADDRESS_PREFIX));
        assert_eq!(SUI_DECIMALS, 9);
        assert_eq!(DEFAULT_COIN_DECIMALS, 6);
    }
}
