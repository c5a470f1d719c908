//! Network repository for data access
//!
//! Catalogue of known networks, looked up by id without any fallback.

use crate::domain::entities::NetworkConfig;

/// Network repository trait
pub trait NetworkRepository {
    /// List known networks in display order
    fn get_networks(&self, enabled_only: bool) -> Vec<NetworkConfig>;

    /// Get a network by id; `None` if unknown
    fn get_network(&self, network_id: &str) -> Option<NetworkConfig>;
}
