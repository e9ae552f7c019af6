//! Deterministic keypair derivation from an XRPL family seed.

use crate::error::{Result, WalletError};
use crate::utils::{base58check_encode, hash160, sha512_half};
use crate::wallet::seed::{KeyAlgorithm, Seed};
use ed25519_dalek::SigningKey;
use secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey};
use zeroize::ZeroizeOnDrop;

pub const PUBLIC_KEY_LEN: usize = 33;

const ACCOUNT_ID_VERSION: u8 = 0x00;
const ED25519_KEY_PREFIX: u8 = 0xED;
// First account of the family; XRPL wallets never derive any other index
const ACCOUNT_INDEX: u32 = 0;

/// Private key bytes, wiped on drop
#[derive(Clone, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: Vec<u8>,
}

impl PrivateKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("length", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub private_key: PrivateKey,
}

pub fn derive_keypair(seed: &Seed) -> Result<KeyPair> {
    match seed.algorithm() {
        KeyAlgorithm::Ed25519 => derive_ed25519(seed),
        KeyAlgorithm::Secp256k1 => derive_secp256k1(seed),
    }
}

fn derive_ed25519(seed: &Seed) -> Result<KeyPair> {
    let secret = sha512_half(seed.entropy());
    let signing_key = SigningKey::from_bytes(&secret);

    let mut public_key = Vec::with_capacity(PUBLIC_KEY_LEN);
    public_key.push(ED25519_KEY_PREFIX);
    public_key.extend_from_slice(signing_key.verifying_key().as_bytes());

    let mut private_key = Vec::with_capacity(PUBLIC_KEY_LEN);
    private_key.push(ED25519_KEY_PREFIX);
    private_key.extend_from_slice(&secret);

    Ok(KeyPair {
        public_key,
        private_key: PrivateKey { bytes: private_key },
    })
}

fn derive_secp256k1(seed: &Seed) -> Result<KeyPair> {
    let secp = Secp256k1::new();

    let root_secret = derive_scalar(seed.entropy(), None)?;
    let root_public = PublicKey::from_secret_key(&secp, &root_secret);

    let intermediate = derive_scalar(&root_public.serialize(), Some(ACCOUNT_INDEX))?;
    let account_secret = root_secret
        .add_tweak(&Scalar::from(intermediate))
        .map_err(|e| WalletError::Crypto(format!("Failed to derive account key: {e}")))?;
    let account_public = PublicKey::from_secret_key(&secp, &account_secret);

    let mut private_key = Vec::with_capacity(PUBLIC_KEY_LEN);
    private_key.push(0x00);
    private_key.extend_from_slice(&account_secret.secret_bytes());

    Ok(KeyPair {
        public_key: account_public.serialize().to_vec(),
        private_key: PrivateKey { bytes: private_key },
    })
}

/// Hash `bytes` (plus an optional discriminator) with an increasing counter
/// until the result is a valid secp256k1 secret key.
fn derive_scalar(bytes: &[u8], discriminator: Option<u32>) -> Result<SecretKey> {
    for counter in 0..=u32::MAX {
        let mut input = bytes.to_vec();
        if let Some(discriminator) = discriminator {
            input.extend_from_slice(&discriminator.to_be_bytes());
        }
        input.extend_from_slice(&counter.to_be_bytes());

        let candidate = sha512_half(&input);
        if let Ok(secret) = SecretKey::from_slice(&candidate) {
            return Ok(secret);
        }
    }
    Err(WalletError::Crypto("No valid secp256k1 scalar for seed".to_string()))
}

/// Classic address for a 33-byte XRPL public key
pub fn classic_address(public_key: &[u8]) -> Result<String> {
    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(WalletError::Crypto(format!(
            "Public key must be {PUBLIC_KEY_LEN} bytes, got {}",
            public_key.len()
        )));
    }
    let mut payload = vec![ACCOUNT_ID_VERSION];
    payload.extend(hash160(public_key));
    Ok(base58check_encode(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_secp256k1_keypair() {
        let seed = Seed::decode("snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap();
        let keypair = derive_keypair(&seed).unwrap();
        assert_eq!(
            hex::encode_upper(&keypair.public_key),
            "0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020"
        );
        assert_eq!(
            classic_address(&keypair.public_key).unwrap(),
            "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
        );
    }

    #[test]
    fn test_ed25519_keypair() {
        let seed = Seed::decode("sEdSKaCy2JT7JaM7v95H9SxkhP9wS2r").unwrap();
        assert_eq!(seed.algorithm(), KeyAlgorithm::Ed25519);

        let keypair = derive_keypair(&seed).unwrap();
        assert_eq!(
            hex::encode_upper(&keypair.public_key),
            "ED01FA53FA5A7E77798F882ECE20B1ABC00BB358A9E55A202D0D0676BD0CE37A63"
        );
        assert_eq!(
            hex::encode_upper(keypair.private_key.as_bytes()),
            "EDB4C4E046826BD26190D09715FC31F4E6A728204EADD112905B08B14B7F15C4F3"
        );
        assert_eq!(
            classic_address(&keypair.public_key).unwrap(),
            "rLUEXYuLiQptky37CqLcm9USQpPiz5rkpD"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let seed = Seed::generate(KeyAlgorithm::Secp256k1);
        let first = derive_keypair(&seed).unwrap();
        let second = derive_keypair(&seed).unwrap();
        assert_eq!(first.public_key, second.public_key);
        assert_eq!(first.private_key.as_bytes(), second.private_key.as_bytes());
    }

    #[test]
    fn test_classic_address_rejects_bad_length() {
        assert!(classic_address(&[0x02; 32]).is_err());
    }

    #[test]
    fn test_private_key_debug_hides_bytes() {
        let seed = Seed::generate(KeyAlgorithm::Ed25519);
        let keypair = derive_keypair(&seed).unwrap();
        let debug = format!("{:?}", keypair.private_key);
        assert_eq!(debug, "PrivateKey { length: 33 }");
    }
}
