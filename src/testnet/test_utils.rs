//! Offline stand-ins for the faucet and key derivation

use crate::error::{Result, WalletError};
use crate::network::Faucet;
use crate::storage::WalletRecord;
use crate::wallet::{KeyAlgorithm, KeyDeriver, PrivateKey, Wallet, PUBLIC_KEY_LEN};
use std::cell::Cell;
use std::collections::HashMap;

enum StubMode {
    RealSeeds,
    Fixed(Vec<WalletRecord>),
    FailAfter(usize),
}

/// Faucet that never touches the network
pub struct StubFaucet {
    mode: StubMode,
    calls: Cell<usize>,
}

impl StubFaucet {
    /// Hands out freshly generated ed25519 wallets
    pub fn with_real_seeds() -> Self {
        Self {
            mode: StubMode::RealSeeds,
            calls: Cell::new(0),
        }
    }

    /// Hands out the given (seed, address) pairs in order
    pub fn fixed(records: Vec<(&str, &str)>) -> Self {
        let records = records
            .into_iter()
            .map(|(seed, address)| WalletRecord::new(seed, address))
            .collect();
        Self {
            mode: StubMode::Fixed(records),
            calls: Cell::new(0),
        }
    }

    /// Succeeds `successes` times, then reports the faucet as unreachable
    pub fn failing_after(successes: usize) -> Self {
        Self {
            mode: StubMode::FailAfter(successes),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Faucet for StubFaucet {
    fn create_funded_wallet(&self) -> Result<WalletRecord> {
        let call = self.calls.get();
        self.calls.set(call + 1);

        match &self.mode {
            StubMode::RealSeeds => {
                let wallet = Wallet::create(KeyAlgorithm::Ed25519)?;
                Ok(WalletRecord::new(
                    wallet.get_seed(),
                    wallet.get_classic_address(),
                ))
            }
            StubMode::Fixed(records) => records
                .get(call)
                .cloned()
                .ok_or_else(|| WalletError::Network("faucet exhausted".to_string())),
            StubMode::FailAfter(successes) if call < *successes => {
                let wallet = Wallet::create(KeyAlgorithm::Ed25519)?;
                Ok(WalletRecord::new(
                    wallet.get_seed(),
                    wallet.get_classic_address(),
                ))
            }
            StubMode::FailAfter(_) => Err(WalletError::Network("faucet unreachable".to_string())),
        }
    }
}

/// Key derivation that maps known seeds to fixed addresses
pub struct StubDeriver {
    addresses: HashMap<String, String>,
}

impl StubDeriver {
    pub fn new(pairs: Vec<(&str, &str)>) -> Self {
        Self {
            addresses: pairs
                .into_iter()
                .map(|(seed, address)| (seed.to_string(), address.to_string()))
                .collect(),
        }
    }
}

impl KeyDeriver for StubDeriver {
    fn derive_from_seed(&self, seed: &str) -> Result<Wallet> {
        let address = self
            .addresses
            .get(seed)
            .ok_or_else(|| WalletError::Format(format!("unknown seed {seed}")))?;
        Ok(Wallet::from_parts(
            seed.to_string(),
            KeyAlgorithm::Ed25519,
            vec![0xED; PUBLIC_KEY_LEN],
            PrivateKey::new(vec![0; PUBLIC_KEY_LEN]),
            address.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_faucet_runs_out() {
        let faucet = StubFaucet::fixed(vec![("sA", "rA")]);
        assert_eq!(
            faucet.create_funded_wallet().unwrap(),
            WalletRecord::new("sA", "rA")
        );
        assert!(faucet.create_funded_wallet().is_err());
        assert_eq!(faucet.calls(), 2);
    }

    #[test]
    fn test_real_seed_faucet_issues_distinct_wallets() {
        let faucet = StubFaucet::with_real_seeds();
        let a = faucet.create_funded_wallet().unwrap();
        let b = faucet.create_funded_wallet().unwrap();
        assert_ne!(a.seed, b.seed);
        assert_ne!(a.classic_address, b.classic_address);
    }

    #[test]
    fn test_stub_deriver_unknown_seed() {
        let deriver = StubDeriver::new(vec![("sA", "rA")]);
        assert!(matches!(
            deriver.derive_from_seed("sB"),
            Err(WalletError::Format(_))
        ));
    }
}
