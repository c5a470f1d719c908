//! Faucet helpers for test networks
//!
//! Endpoint selection, the airdrop request body, and the client-side guard
//! that keeps the dashboard from hammering the faucet. The HTTP call itself
//! belongs to the caller.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{NetworkConfig, RemoteNetworkOverride};
use crate::shared::constants::{AIRDROP_COOLDOWN_MS, BUY_CRYPTO_URL, FAUCET_URL_TEMPLATE, MAINNET};
use crate::shared::error::WalletError;
use crate::shared::utils::fill_network_template;

/// Faucet URL for `network_id`.
///
/// The remote flag entry wins, then the network's own faucet, then the public
/// `faucet.<network>.sui.io` endpoint.
pub fn faucet_endpoint(
    network_id: &str,
    remote: Option<&RemoteNetworkOverride>,
    network: &NetworkConfig,
) -> String {
    remote
        .and_then(|remote| remote.faucet_api.clone())
        .or_else(|| network.faucet_api.clone())
        .unwrap_or_else(|| fill_network_template(FAUCET_URL_TEMPLATE, network_id))
}

/// Mainnet has no faucet
pub fn airdrop_available(network_id: &str) -> bool {
    network_id != MAINNET
}

/// On-ramp link for `address`
pub fn buy_crypto_url(address: &str) -> String {
    format!("{}?wallet_address={}", BUY_CRYPTO_URL, address)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAmountRequest {
    pub recipient: String,
}

/// JSON body the faucet expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetRequest {
    #[serde(rename = "FixedAmountRequest")]
    pub fixed_amount_request: FixedAmountRequest,
}

impl FaucetRequest {
    pub fn fixed_amount(recipient: &str) -> Self {
        Self {
            fixed_amount_request: FixedAmountRequest {
                recipient: recipient.to_string(),
            },
        }
    }
}

/// One airdrop at a time, and none within the cooldown of the previous attempt.
///
/// The cooldown is measured from when the previous attempt started, and only
/// counts once that attempt has finished.
#[derive(Debug, Clone)]
pub struct AirdropCooldown {
    window: Duration,
    last_started: Option<DateTime<Utc>>,
    in_flight: Option<DateTime<Utc>>,
}

impl Default for AirdropCooldown {
    fn default() -> Self {
        Self::new(Duration::milliseconds(AIRDROP_COOLDOWN_MS))
    }
}

impl AirdropCooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_started: None,
            in_flight: None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start an airdrop at `now`, or say why not
    pub fn try_acquire(&mut self, now: DateTime<Utc>) -> Result<(), WalletError> {
        if self.in_flight.is_some() {
            return Err(WalletError::in_progress("airdrop request"));
        }
        if let Some(last) = self.last_started {
            let elapsed = now - last;
            if elapsed <= self.window {
                let remaining = (self.window - elapsed).num_milliseconds();
                debug!("Airdrop rejected, {}ms left in cooldown", remaining);
                return Err(WalletError::rate_limited(remaining));
            }
        }
        self.in_flight = Some(now);
        Ok(())
    }

    /// Finish the in-flight airdrop, successful or not
    pub fn release(&mut self) {
        if let Some(started) = self.in_flight.take() {
            self.last_started = Some(started);
        }
    }
}
