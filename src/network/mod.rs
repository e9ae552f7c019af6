//! HTTP clients for the test network
//!
//! The faucet creates and funds accounts; the JSON-RPC client reads account
//! balances from validated ledgers.

pub mod faucet;
pub mod rpc;

pub use faucet::{Faucet, XrplFaucet, FAUCET_USER_AGENT, FUNDING_POLL_ATTEMPTS};
pub use rpc::{drops_to_xrp, parse_account_balance, JsonRpcClient};
