//! Domain layer - entities and repositories
//!
//! Coin and network records shared between the core transformations and
//! their callers, plus the repository seam for the network catalogue.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
