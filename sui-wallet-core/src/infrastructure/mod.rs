//! Infrastructure layer - configuration and external data shapes
//!
//! This module contains the edges of the wallet core: process settings and
//! decoding of the coins query the dashboard polls.

pub mod graphql;
pub mod settings;

// Re-export infrastructure components
pub use graphql::*;
pub use settings::*;
