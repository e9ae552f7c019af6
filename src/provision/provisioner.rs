use crate::error::{Result, WalletError};
use crate::network::Faucet;
use crate::storage::WalletPairDocument;
use log::info;
use std::path::Path;

/// Request wallet A (sender) then wallet B (receiver) and persist both.
///
/// Nothing is written unless both faucet requests succeed. A failure on B
/// leaves A funded on the ledger but unrecorded.
pub fn provision_wallet_pair<F: Faucet>(faucet: &F, path: &Path) -> Result<WalletPairDocument> {
    println!("Creating Wallet A (sender) + funding...");
    let wallet_a = faucet.create_funded_wallet()?;
    info!("Wallet A funded: {}", wallet_a.classic_address);

    println!();
    println!("Creating Wallet B (receiver) + funding...");
    let wallet_b = faucet.create_funded_wallet()?;
    info!("Wallet B funded: {}", wallet_b.classic_address);

    if wallet_a.seed == wallet_b.seed {
        return Err(WalletError::DuplicateSeed);
    }

    let document = WalletPairDocument::new(wallet_a, wallet_b);
    document.save_to_file(path)?;

    println!();
    println!("Saved to {}", path.display());
    println!("Wallet A: {}", document.wallet_a.classic_address);
    println!("Wallet B: {}", document.wallet_b.classic_address);
    Ok(document)
}
