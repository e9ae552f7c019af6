use crate::error::Result;
use crate::wallet::keypair::{classic_address, derive_keypair, PrivateKey};
use crate::wallet::seed::{KeyAlgorithm, Seed};

/// In-memory wallet handle regenerated from a seed
#[derive(Clone)]
pub struct Wallet {
    seed: String,
    algorithm: KeyAlgorithm,
    public_key: Vec<u8>,
    private_key: PrivateKey,
    classic_address: String,
}

impl Wallet {
    /// Create a brand new wallet with fresh entropy
    pub fn create(algorithm: KeyAlgorithm) -> Result<Wallet> {
        Wallet::from_decoded_seed(&Seed::generate(algorithm))
    }

    pub fn from_seed(seed: &str) -> Result<Wallet> {
        let decoded = Seed::decode(seed)?;
        Wallet::from_decoded_seed(&decoded)
    }

    /// Assemble a handle from material derived elsewhere
    pub fn from_parts(
        seed: String,
        algorithm: KeyAlgorithm,
        public_key: Vec<u8>,
        private_key: PrivateKey,
        classic_address: String,
    ) -> Wallet {
        Wallet {
            seed,
            algorithm,
            public_key,
            private_key,
            classic_address,
        }
    }

    fn from_decoded_seed(seed: &Seed) -> Result<Wallet> {
        let keypair = derive_keypair(seed)?;
        let classic_address = classic_address(&keypair.public_key)?;
        Ok(Wallet {
            seed: seed.encode(),
            algorithm: seed.algorithm(),
            public_key: keypair.public_key,
            private_key: keypair.private_key,
            classic_address,
        })
    }

    pub fn get_seed(&self) -> &str {
        &self.seed
    }

    pub fn get_algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn get_public_key(&self) -> &[u8] {
        self.public_key.as_slice()
    }

    /// Public key as uppercase hex, the form XRPL tooling displays
    pub fn get_public_key_hex(&self) -> String {
        hex::encode_upper(&self.public_key)
    }

    pub fn get_private_key(&self) -> &[u8] {
        self.private_key.as_bytes()
    }

    pub fn get_classic_address(&self) -> &str {
        &self.classic_address
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("algorithm", &self.algorithm)
            .field("public_key", &self.get_public_key_hex())
            .field("classic_address", &self.classic_address)
            .finish_non_exhaustive()
    }
}
