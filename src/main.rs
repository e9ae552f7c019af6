// Entry point for the wallet pair CLI
// I set up a sender/receiver pair once, then reload it as often as other tooling needs it
use clap::Parser;
use log::{error, LevelFilter};
use std::process;
use xrpl_wallet_pair::{
    drops_to_xrp, load_wallet_pair, provision_wallet_pair, Command, JsonRpcClient, Opt,
    SeedDeriver, Wallet, XrplFaucet, GLOBAL_CONFIG,
};

fn main() {
    // Info level is enough to follow the faucet funding progress
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();
    // Flags win over environment variables, which win over the testnet defaults
    opt.apply_overrides(&GLOBAL_CONFIG);

    // Any failure ends the run here: I log it once and exit with code 1
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let path = GLOBAL_CONFIG.wallets_path()?;
    match command {
        // Two faucet requests, then one write of the whole document
        Command::CreateWallets => {
            let faucet = XrplFaucet::new(
                &GLOBAL_CONFIG.get_faucet_url(),
                &GLOBAL_CONFIG.get_rpc_url(),
            )?;
            provision_wallet_pair(&faucet, &path)?;
        }
        // Offline: the seeds alone give back the keys and addresses
        Command::LoadWallets => {
            let pair = load_wallet_pair(&SeedDeriver, &path)?;
            println!("Loaded");
            println!("Wallet A: {}", pair.wallet_a.get_classic_address());
            println!("Wallet B: {}", pair.wallet_b.get_classic_address());
        }
        // Same load, plus one account_info call per wallet
        Command::Balances => {
            let pair = load_wallet_pair(&SeedDeriver, &path)?;
            let rpc = JsonRpcClient::new(&GLOBAL_CONFIG.get_rpc_url())?;
            print_balance(&rpc, "Wallet A", &pair.wallet_a)?;
            print_balance(&rpc, "Wallet B", &pair.wallet_b)?;
        }
    }
    Ok(())
}

fn print_balance(
    rpc: &JsonRpcClient,
    label: &str,
    wallet: &Wallet,
) -> Result<(), Box<dyn std::error::Error>> {
    let address = wallet.get_classic_address();
    // An account the faucet never funded does not exist on the ledger yet
    match rpc.account_info(address)? {
        Some(drops) => println!("{label}: {address} {} XRP", drops_to_xrp(drops)),
        None => println!("{label}: {address} not found on ledger"),
    }
    Ok(())
}
