//! Core wallet functionality
//!
//! This module contains the dashboard data transformations: coin formatting,
//! network resolution and faucet endpoint selection.

pub mod coins;
pub mod network;
pub mod faucet;
