//! Sui Wallet Core
//!
//! Data shaping behind the wallet extension dashboard.
//!
//! ## Architecture
//!
//! - **Core**: coin formatting, network resolution, faucet helpers
//! - **Domain**: coin and network entities, the network repository trait
//! - **Infrastructure**: settings and coins query decoding
//! - **Shared**: common types, constants, errors and amount utilities
//!
//! ## Usage
//!
//! ```rust
//! use sui_wallet_core::{resolve, CoinsView, FeatureFlagDocument, RawBalanceNode};
//!
//! let flags = FeatureFlagDocument::from_json_str(
//!     r#"{"networks":{"testnet":{"full_node_url":"https://x"}}}"#,
//! ).unwrap();
//! let network = resolve("testnet", Some(&flags));
//! assert_eq!(network.query_rpc_url, "https://x");
//!
//! let mut coins = CoinsView::new();
//! coins.refresh(&[RawBalanceNode::new("0x2::sui::SUI", "1000000000")]);
//! assert_eq!(coins.get_coin_balance("0x2::sui::SUI").decimals, 9);
//! ```

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

pub use crate::infrastructure::Settings;

// Re-export specific components
pub use crate::core::coins::{format_coin, format_coins, total_usd, CoinIndex, CoinsView};
pub use crate::core::faucet::{airdrop_available, faucet_endpoint, AirdropCooldown, FaucetRequest};
pub use crate::core::network::{resolve, BuiltInNetworks, NetworkSelector};

// Re-export domain entities
pub use crate::domain::{
    CoinBalance, CoinRecord, FeatureFlagDocument, NetworkConfig, NetworkRepository, RawBalanceNode,
    RemoteNetworkOverride,
};

// Re-export shared types
pub use shared::error::WalletError;
pub use shared::types::WalletResult;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize logging and load settings.
///
/// `RUST_LOG` takes precedence over the configured `log_level`. Safe to call
/// more than once; later calls leave the installed logger alone.
pub fn init() -> Result<Settings, WalletError> {
    let settings = Settings::load()?;
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.clone()),
    )
    .try_init();
    log::info!("{} {} initialized", NAME, VERSION);
    Ok(settings)
}

/// Resolve the configured default network using the configured feature flags
pub fn resolve_default_network(settings: &Settings) -> Result<NetworkConfig, WalletError> {
    let flags = settings.feature_flags()?;
    Ok(resolve(&settings.default_network, flags.as_ref()))
}
