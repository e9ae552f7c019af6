use crate::error::{Result, WalletError};
use crate::storage::{WalletPairDocument, WalletRecord};
use crate::wallet::{KeyDeriver, Wallet};
use log::info;
use std::path::Path;

/// Wallet handles rebuilt from a persisted document
#[derive(Debug, Clone)]
pub struct WalletPair {
    pub wallet_a: Wallet,
    pub wallet_b: Wallet,
}

/// Read the document at `path` and regenerate both wallets from their seeds.
pub fn load_wallet_pair<D: KeyDeriver>(deriver: &D, path: &Path) -> Result<WalletPair> {
    let document = WalletPairDocument::load_from_file(path)?;
    info!("Loaded wallet document from {}", path.display());

    let wallet_a = restore(deriver, "wallet_a", &document.wallet_a)?;
    let wallet_b = restore(deriver, "wallet_b", &document.wallet_b)?;
    Ok(WalletPair { wallet_a, wallet_b })
}

fn restore<D: KeyDeriver>(deriver: &D, slot: &str, record: &WalletRecord) -> Result<Wallet> {
    let wallet = deriver
        .derive_from_seed(&record.seed)
        .map_err(|e| match e {
            WalletError::Format(msg) | WalletError::Crypto(msg) => {
                WalletError::Format(format!("{slot}: {msg}"))
            }
            other => other,
        })?;

    if wallet.get_classic_address() != record.classic_address {
        return Err(WalletError::Format(format!(
            "{slot}: seed derives {} but the file records {}",
            wallet.get_classic_address(),
            record.classic_address
        )));
    }
    Ok(wallet)
}
