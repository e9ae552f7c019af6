//! Configuration management
//!
//! Endpoints and the wallet document location. Each value can be overridden
//! through the environment.

pub mod settings;

pub use settings::{
    Config, DEFAULT_FAUCET_URL, DEFAULT_RPC_URL, DEFAULT_WALLETS_FILE, GLOBAL_CONFIG,
};
