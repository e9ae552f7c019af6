use crate::error::{Result, WalletError};
use crate::utils::{base58check_decode, base58check_encode};
use rand::RngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const SEED_ENTROPY_LEN: usize = 16;

const SECP256K1_SEED_PREFIX: [u8; 1] = [0x21];
const ED25519_SEED_PREFIX: [u8; 3] = [0x01, 0xE1, 0x4B];

/// Signing algorithm selected by the seed encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Ed25519,
    Secp256k1,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Ed25519 => write!(f, "ed25519"),
            KeyAlgorithm::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

/// Decoded XRPL family seed
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    entropy: [u8; SEED_ENTROPY_LEN],
    #[zeroize(skip)]
    algorithm: KeyAlgorithm,
}

impl Seed {
    /// Fresh seed from the OS random source
    pub fn generate(algorithm: KeyAlgorithm) -> Seed {
        let mut entropy = [0u8; SEED_ENTROPY_LEN];
        rand::rngs::OsRng.fill_bytes(&mut entropy);
        Seed { entropy, algorithm }
    }

    /// Parse a base58 seed string such as `sEd...` or `s...`
    pub fn decode(encoded: &str) -> Result<Seed> {
        let payload = base58check_decode(encoded)
            .map_err(|e| WalletError::Format(format!("Invalid seed: {e}")))?;

        let (algorithm, entropy) = if payload.len() == ED25519_SEED_PREFIX.len() + SEED_ENTROPY_LEN
            && payload.starts_with(&ED25519_SEED_PREFIX)
        {
            (KeyAlgorithm::Ed25519, &payload[ED25519_SEED_PREFIX.len()..])
        } else if payload.len() == SECP256K1_SEED_PREFIX.len() + SEED_ENTROPY_LEN
            && payload.starts_with(&SECP256K1_SEED_PREFIX)
        {
            (
                KeyAlgorithm::Secp256k1,
                &payload[SECP256K1_SEED_PREFIX.len()..],
            )
        } else {
            return Err(WalletError::Format(
                "Invalid seed: unrecognised version prefix or length".to_string(),
            ));
        };

        let mut bytes = [0u8; SEED_ENTROPY_LEN];
        bytes.copy_from_slice(entropy);
        Ok(Seed {
            entropy: bytes,
            algorithm,
        })
    }

    pub fn encode(&self) -> String {
        let mut payload = match self.algorithm {
            KeyAlgorithm::Ed25519 => ED25519_SEED_PREFIX.to_vec(),
            KeyAlgorithm::Secp256k1 => SECP256K1_SEED_PREFIX.to_vec(),
        };
        payload.extend_from_slice(&self.entropy);
        let encoded = base58check_encode(&payload);
        payload.zeroize();
        encoded
    }

    pub fn entropy(&self) -> &[u8; SEED_ENTROPY_LEN] {
        &self.entropy
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
