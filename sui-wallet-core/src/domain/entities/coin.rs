//! Coin entities for the wallet core

use serde::{Deserialize, Serialize};

use crate::shared::error::WalletError;
use crate::shared::types::{Balance, CoinType, Decimals};
use crate::shared::utils::format_amount;

/// Display model for one coin the address holds.
///
/// Derived from a [`RawBalanceNode`] on every refresh and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    #[serde(rename = "type")]
    pub coin_type: CoinType,
    pub symbol: String,
    pub balance: Balance,
    pub decimals: Decimals,
    pub is_verified: bool,
    #[serde(rename = "iconURL")]
    pub icon_url: Option<String>,
    pub usd: Option<String>,
    pub price_percent_change_24h: Option<String>,
    pub wrapped_chain: Option<String>,
    pub bridge: Option<String>,
}

/// Balance and precision for a single coin type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinBalance {
    pub balance: Balance,
    pub decimals: Decimals,
}

impl CoinBalance {
    /// Balance reported for coin types the address does not hold
    pub fn zero() -> Self {
        Self {
            balance: "0".to_string(),
            decimals: 0,
        }
    }

    /// Human-readable balance with the decimal point applied
    pub fn formatted(&self) -> Result<String, WalletError> {
        format_amount(&self.balance, self.decimals)
    }
}

impl From<&CoinRecord> for CoinBalance {
    fn from(coin: &CoinRecord) -> Self {
        Self {
            balance: coin.balance.clone(),
            decimals: coin.decimals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinTypeRepr {
    pub repr: CoinType,
}

/// One entry of `address.balances.nodes` in the coins query response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalanceNode {
    pub coin_type: CoinTypeRepr,
    pub total_balance: Balance,
    #[serde(default)]
    pub coin_object_count: Option<u64>,
}

impl RawBalanceNode {
    pub fn new(coin_type: impl Into<CoinType>, total_balance: impl Into<Balance>) -> Self {
        Self {
            coin_type: CoinTypeRepr { repr: coin_type.into() },
            total_balance: total_balance.into(),
            coin_object_count: None,
        }
    }

    pub fn coin_type(&self) -> &str {
        &self.coin_type.repr
    }
}
