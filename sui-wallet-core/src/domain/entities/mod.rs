//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts in the wallet system.

pub mod coin;
pub mod network;

// Re-export entities
pub use coin::*;
pub use network::*;
