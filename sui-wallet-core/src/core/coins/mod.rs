//! Coin formatting for the dashboard
//!
//! Turns the balance nodes of the coins query into display records and an
//! index keyed by coin type. Everything here is a pure function of its input;
//! [`CoinsView`] only adds memoization on top.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::domain::{CoinBalance, CoinRecord, RawBalanceNode};
use crate::shared::constants::{
    DEFAULT_COIN_DECIMALS, FRAMEWORK_ADDRESS_PREFIX, SUI_COIN_TYPE, SUI_DECIMALS, SUI_ICON_URL,
    SUI_TYPE_MARKER, UNKNOWN_COIN_SYMBOL, ZERO_BALANCE,
};
use crate::shared::types::{CoinType, Decimals};

/// Upper-cased last path segment of a coin type, e.g. `0x2::sui::SUI` -> `SUI`
pub fn coin_symbol(coin_type: &str) -> String {
    match coin_type.rsplit_once(':') {
        Some((_, name)) if !name.is_empty() => name.to_uppercase(),
        _ => UNKNOWN_COIN_SYMBOL.to_string(),
    }
}

/// Heuristic: anything published at the framework address counts as verified
pub fn is_verified_coin(coin_type: &str) -> bool {
    coin_type.starts_with(SUI_COIN_TYPE) || coin_type.starts_with(FRAMEWORK_ADDRESS_PREFIX)
}

pub fn default_decimals(coin_type: &str) -> Decimals {
    if coin_type.contains(SUI_TYPE_MARKER) {
        SUI_DECIMALS
    } else {
        DEFAULT_COIN_DECIMALS
    }
}

pub fn default_icon_url(coin_type: &str) -> Option<String> {
    coin_type
        .contains(SUI_TYPE_MARKER)
        .then(|| SUI_ICON_URL.to_string())
}

/// Build the display record for one balance node.
///
/// Price and bridge metadata have no source yet and are always `None`.
pub fn format_coin(node: &RawBalanceNode) -> CoinRecord {
    let coin_type = node.coin_type();
    CoinRecord {
        coin_type: coin_type.to_string(),
        symbol: coin_symbol(coin_type),
        balance: node.total_balance.clone(),
        decimals: default_decimals(coin_type),
        is_verified: is_verified_coin(coin_type),
        icon_url: default_icon_url(coin_type),
        usd: None,
        price_percent_change_24h: None,
        wrapped_chain: None,
        bridge: None,
    }
}

/// Format every node with a non-zero balance, preserving input order.
///
/// Only the literal string `"0"` is treated as zero; `"0.0"` or `"00"` pass through.
/// Nodes sharing a coin type are not merged: each stays in the list, while
/// [`CoinIndex`] keeps the later one.
pub fn format_coins(nodes: &[RawBalanceNode]) -> Vec<CoinRecord> {
    nodes
        .iter()
        .filter(|node| node.total_balance != ZERO_BALANCE)
        .map(format_coin)
        .collect()
}

/// Sum of the `usd` values of `coins`; missing or unparsable values count as zero
pub fn total_usd(coins: &[CoinRecord]) -> f64 {
    coins
        .iter()
        .filter_map(|coin| coin.usd.as_deref())
        .filter_map(|usd| usd.parse::<f64>().ok())
        .sum()
}

/// Coin records keyed by coin type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinIndex {
    coins: HashMap<CoinType, CoinRecord>,
}

impl CoinIndex {
    pub fn from_records(records: &[CoinRecord]) -> Self {
        let mut coins = HashMap::with_capacity(records.len());
        for record in records {
            if coins.insert(record.coin_type.clone(), record.clone()).is_some() {
                debug!("Duplicate coin type {} in balance list, keeping the later entry", record.coin_type);
            }
        }
        Self { coins }
    }

    pub fn get(&self, coin_type: &str) -> Option<&CoinRecord> {
        self.coins.get(coin_type)
    }

    /// Balance for `coin_type`, or `{"0", 0}` if the address does not hold it
    pub fn get_coin_balance(&self, coin_type: &str) -> CoinBalance {
        self.get(coin_type)
            .map(CoinBalance::from)
            .unwrap_or_else(CoinBalance::zero)
    }

    pub fn contains(&self, coin_type: &str) -> bool {
        self.coins.contains_key(coin_type)
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

/// Memoized coin list for one polled query.
///
/// Refreshing with the same nodes hands back the previously built `Arc`s so
/// consumers comparing by pointer see no change.
#[derive(Debug, Default)]
pub struct CoinsView {
    source: Option<Vec<RawBalanceNode>>,
    coins: Arc<Vec<CoinRecord>>,
    index: Arc<CoinIndex>,
}

impl CoinsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, nodes: &[RawBalanceNode]) -> Arc<Vec<CoinRecord>> {
        if self.source.as_deref() == Some(nodes) {
            return Arc::clone(&self.coins);
        }

        let coins = format_coins(nodes);
        debug!("Formatted {} of {} balance nodes", coins.len(), nodes.len());
        self.index = Arc::new(CoinIndex::from_records(&coins));
        self.coins = Arc::new(coins);
        self.source = Some(nodes.to_vec());
        Arc::clone(&self.coins)
    }

    pub fn coins(&self) -> Arc<Vec<CoinRecord>> {
        Arc::clone(&self.coins)
    }

    pub fn index(&self) -> Arc<CoinIndex> {
        Arc::clone(&self.index)
    }

    pub fn get_coin_balance(&self, coin_type: &str) -> CoinBalance {
        self.index.get_coin_balance(coin_type)
    }
}
