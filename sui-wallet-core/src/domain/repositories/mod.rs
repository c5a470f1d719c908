//! Domain repositories
//!
//! This module contains repository traits for data access
//! following Domain-Driven Design principles.

pub mod network_repository;

// Re-export repositories
pub use network_repository::*;
