use crate::error::{Result, WalletError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Seed and address of one wallet slot as persisted on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletRecord {
    pub seed: String,
    pub classic_address: String,
}

impl WalletRecord {
    pub fn new(seed: impl Into<String>, classic_address: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            classic_address: classic_address.into(),
        }
    }

    fn validate(&self, slot: &str) -> Result<()> {
        if self.seed.trim().is_empty() {
            return Err(WalletError::Format(format!("{slot}.seed is empty")));
        }
        if self.classic_address.trim().is_empty() {
            return Err(WalletError::Format(format!("{slot}.classic_address is empty")));
        }
        Ok(())
    }
}

/// The sender (A) and receiver (B) wallets written by a single provisioning run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletPairDocument {
    pub wallet_a: WalletRecord,
    pub wallet_b: WalletRecord,
}

impl WalletPairDocument {
    pub fn new(wallet_a: WalletRecord, wallet_b: WalletRecord) -> Self {
        Self { wallet_a, wallet_b }
    }

    pub fn validate(&self) -> Result<()> {
        self.wallet_a.validate("wallet_a")?;
        self.wallet_b.validate("wallet_b")?;
        if self.wallet_a.seed == self.wallet_b.seed {
            return Err(WalletError::DuplicateSeed);
        }
        Ok(())
    }

    /// Indented JSON, two spaces per level
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let document: WalletPairDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Read and validate the document at `path`
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                WalletError::NotFound(format!("Wallet file {} does not exist", path.display()))
            }
            _ => WalletError::from(e),
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => {
                WalletError::Format(format!("{} is not UTF-8: {e}", path.display()))
            }
            _ => WalletError::from(e),
        })?;
        WalletPairDocument::from_json(&contents)
    }

    /// Replace whatever is at `path` with this document
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = self.to_json()?;

        if path.exists() {
            warn!("Overwriting existing wallet file {}", path.display());
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
