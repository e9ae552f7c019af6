//! Error handling for wallet provisioning and loading
//!
//! Every failure in this crate funnels into [`WalletError`] so that the binary
//! can report it once and exit.

use std::fmt;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Error types for wallet provisioning, loading and ledger queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Faucet or JSON-RPC endpoint unreachable, or it rejected the request
    Network(String),
    /// Wallet document malformed, a field missing, or a seed undecodable
    Format(String),
    /// Wallet document file absent
    NotFound(String),
    /// Key derivation errors
    Crypto(String),
    /// File I/O errors other than a missing document
    Io(String),
    /// Configuration errors
    Config(String),
    /// Both wallet slots came back with the same seed
    DuplicateSeed,
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::Network(msg) => write!(f, "Network error: {msg}"),
            WalletError::Format(msg) => write!(f, "Format error: {msg}"),
            WalletError::NotFound(msg) => write!(f, "Not found: {msg}"),
            WalletError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            WalletError::Io(msg) => write!(f, "I/O error: {msg}"),
            WalletError::Config(msg) => write!(f, "Configuration error: {msg}"),
            WalletError::DuplicateSeed => {
                write!(f, "Wallet A and wallet B were issued the same seed")
            }
        }
    }
}

impl std::error::Error for WalletError {}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => WalletError::NotFound(err.to_string()),
            _ => WalletError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Format(err.to_string())
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        WalletError::Network(err.to_string())
    }
}
