//! Coins query and response decoding
//!
//! The transport is owned by the caller; this module only knows the query
//! text and how to pull balance nodes out of whatever JSON comes back.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::coins::format_coins;
use crate::domain::{CoinRecord, RawBalanceNode};
use crate::shared::constants::COINS_POLL_INTERVAL_MS;
use crate::shared::error::WalletError;
use crate::shared::types::{Address, WalletResult};

pub const GET_COINS_QUERY: &str = r#"query getCoins($address: SuiAddress!) {
  address(address: $address) {
    balances {
      nodes {
        coinType {
          repr
        }
        totalBalance
        coinObjectCount
      }
    }
    coins {
      nodes {
        coinBalance
        contents {
          json
          type {
            repr
          }
        }
      }
    }
  }
}"#;

pub const COINS_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(COINS_POLL_INTERVAL_MS);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCoinsVariables {
    pub address: Address,
}

/// Request payload for a GraphQL POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetCoinsRequest<'a> {
    pub query: &'a str,
    pub variables: GetCoinsVariables,
}

impl GetCoinsRequest<'static> {
    pub fn new(address: &str) -> Self {
        Self {
            query: GET_COINS_QUERY,
            variables: GetCoinsVariables {
                address: address.to_string(),
            },
        }
    }
}

/// No address, no query
pub fn should_query(address: &str) -> bool {
    !address.is_empty()
}

/// First entry of a non-empty GraphQL `errors` array, as a query error
fn response_error(response: &Value) -> Option<WalletError> {
    let first = response.get("errors")?.as_array()?.first()?;
    let message = first
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| first.to_string());
    Some(WalletError::query(message))
}

/// Balance nodes from a coins query response.
///
/// Accepts the `data` object or the full `{"data": ...}` envelope. A non-empty
/// `errors` array fails with the first error's message. Otherwise a missing
/// path yields an empty list and nodes that do not decode are skipped.
pub fn balance_nodes_from_response(response: &Value) -> WalletResult<Vec<RawBalanceNode>> {
    if let Some(error) = response_error(response) {
        warn!("Coins query failed: {}", error);
        return Err(error);
    }

    let data = response.get("data").unwrap_or(response);
    let Some(nodes) = data
        .pointer("/address/balances/nodes")
        .and_then(Value::as_array)
    else {
        return Ok(Vec::new());
    };

    Ok(nodes
        .iter()
        .filter_map(|node| match serde_json::from_value::<RawBalanceNode>(node.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping malformed balance node: {}", e);
                None
            }
        })
        .collect())
}

/// Display records straight from a coins query response
pub fn coins_from_response(response: &Value) -> WalletResult<Vec<CoinRecord>> {
    Ok(format_coins(&balance_nodes_from_response(response)?))
}
