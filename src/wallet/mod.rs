//! Seeds, key derivation and wallet handles
//!
//! A wallet is fully determined by its seed: decoding the seed picks the
//! signing algorithm, derivation yields the keypair, and the classic address
//! follows from the public key.

pub mod keypair;
pub mod seed;
#[allow(clippy::module_inception)]
pub mod wallet;

pub use keypair::{classic_address, derive_keypair, KeyPair, PrivateKey, PUBLIC_KEY_LEN};
pub use seed::{KeyAlgorithm, Seed, SEED_ENTROPY_LEN};
pub use wallet::Wallet;

use crate::error::Result;

/// Regenerates a wallet from stored seed material
pub trait KeyDeriver {
    fn derive_from_seed(&self, seed: &str) -> Result<Wallet>;
}

/// Offline derivation using the XRPL key algorithms
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedDeriver;

impl KeyDeriver for SeedDeriver {
    fn derive_from_seed(&self, seed: &str) -> Result<Wallet> {
        Wallet::from_seed(seed)
    }
}
