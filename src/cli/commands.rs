use crate::config::Config;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xrpl-wallet-pair")]
pub struct Opt {
    #[arg(long = "rpc-url", global = true, help = "JSON-RPC endpoint of the test network")]
    pub rpc_url: Option<String>,
    #[arg(long = "faucet-url", global = true, help = "Faucet endpoint that funds new accounts")]
    pub faucet_url: Option<String>,
    #[arg(long = "file", global = true, help = "Wallet document to write or read")]
    pub file: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

impl Opt {
    /// Command-line flags take precedence over the environment
    pub fn apply_overrides(&self, config: &Config) {
        if let Some(url) = &self.rpc_url {
            config.set_rpc_url(url.clone());
        }
        if let Some(url) = &self.faucet_url {
            config.set_faucet_url(url.clone());
        }
        if let Some(file) = &self.file {
            config.set_wallets_file(file.clone());
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "createwallets",
        about = "Create and fund wallet A (sender) and wallet B (receiver), then save them"
    )]
    CreateWallets,
    #[command(
        name = "loadwallets",
        about = "Rebuild both wallets from the saved seeds and print their addresses"
    )]
    LoadWallets,
    #[command(name = "balances", about = "Print the XRP balance of both saved wallets")]
    Balances,
}
