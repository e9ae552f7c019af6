//! # XRPL Wallet Pair
//!
//! Sets up a sender and a receiver wallet on the XRP Ledger testnet and keeps
//! them in a small JSON file so other tooling can pick them up again.
//!
//! ## Layout
//! - `provision/`: the two workflows, create-then-persist and load-then-reconstruct
//! - `wallet/`: seed codec, ed25519/secp256k1 derivation, classic addresses
//! - `storage/`: the `wallets.json` document
//! - `network/`: faucet and JSON-RPC clients
//! - `config/`: endpoints and file location, overridable from the environment
//! - `utils/`: hashing and XRPL base58
//! - `cli/`: subcommands
//!
//! When I need to trace a run, I start in `main.rs` and follow the command
//! into `provision/`.
//!
//! Provisioning goes through the [`Faucet`] trait and loading through
//! [`KeyDeriver`], so both can run against stubs with no network.

pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod provision;
pub mod storage;
pub mod utils;
pub mod wallet;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{Result, WalletError};
pub use network::{drops_to_xrp, Faucet, JsonRpcClient, XrplFaucet};
pub use provision::{load_wallet_pair, provision_wallet_pair, WalletPair};
pub use storage::{WalletPairDocument, WalletRecord};
pub use wallet::{KeyAlgorithm, KeyDeriver, Seed, SeedDeriver, Wallet};
