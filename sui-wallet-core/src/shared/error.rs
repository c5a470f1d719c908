//! Error handling for the wallet core
//!
//! The coin formatter and network resolver are total and never produce these.
//! Errors only come from the edges: settings loading, feature-flag files,
//! GraphQL error responses and the airdrop cooldown.

use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Rate limited: retry in {remaining_ms}ms")]
    RateLimited { remaining_ms: i64 },

    #[error("Operation already in progress: {0}")]
    InProgress(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Query error: {0}")]
    Query(String),
}

impl WalletError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    pub fn rate_limited(remaining_ms: i64) -> Self {
        Self::RateLimited { remaining_ms }
    }

    pub fn in_progress(message: impl Into<String>) -> Self {
        Self::InProgress(message.into())
    }

    /// Create a query error from a GraphQL error message
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }
}

// Standard library error conversions
impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for WalletError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_creation() {
        let config_error = WalletError::config("Invalid configuration");
        let validation_error = WalletError::validation("Invalid input");
        let limited = WalletError::rate_limited(1200);

        assert!(matches!(config_error, WalletError::Config(_)));
        assert!(matches!(validation_error, WalletError::Validation(_)));
        assert_eq!(limited, WalletError::RateLimited { remaining_ms: 1200 });
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let wallet_error: WalletError = io_error.into();
        assert!(matches!(wallet_error, WalletError::Io(_)));

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let wallet_error: WalletError = json_error.into();
        assert!(matches!(wallet_error, WalletError::Serialization(_)));
    }

    #[test]
    fn test_error_display() {
        let error = WalletError::rate_limited(3000);
        let display = format!("{}", error);

        assert!(display.contains("Rate limited"));
        assert!(display.contains("3000ms"));

        let query = WalletError::query("upstream timeout");
        assert_eq!(format!("{}", query), "Query error: upstream timeout");
    }
}
