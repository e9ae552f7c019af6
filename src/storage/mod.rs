//! Persistence for the wallet pair document
//!
//! The document is a small JSON file in the working directory. It is written
//! whole by the provisioner and only ever read afterwards.

pub mod wallet_file;

pub use wallet_file::{WalletPairDocument, WalletRecord};
