use ring::digest::{Context, SHA256, SHA512};
use ripemd::{Digest as RipemdDigest, Ripemd160};

use crate::error::{Result, WalletError};

pub const CHECKSUM_LEN: usize = 4;

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// First 32 bytes of SHA-512, the XRPL "half SHA-512"
pub fn sha512_half(data: &[u8]) -> [u8; 32] {
    let mut context = Context::new(&SHA512);
    context.update(data);
    let digest = context.finish();
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest.as_ref()[..32]);
    half
}

pub fn ripemd160_digest(data: &[u8]) -> Vec<u8> {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// RIPEMD-160 of SHA-256, used for XRPL account IDs
pub fn hash160(data: &[u8]) -> Vec<u8> {
    ripemd160_digest(sha256_digest(data).as_slice())
}

fn checksum(payload: &[u8]) -> Vec<u8> {
    let first_sha = sha256_digest(payload);
    let second_sha = sha256_digest(first_sha.as_slice());
    second_sha[0..CHECKSUM_LEN].to_vec()
}

/// Base58 in the XRPL alphabet, with a trailing double SHA-256 checksum
pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = payload.to_vec();
    data.extend(checksum(payload));
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_string()
}

/// Decode an XRPL base58check string and return the payload without its checksum
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>> {
    let data = bs58::decode(encoded)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_vec()
        .map_err(|e| WalletError::Format(format!("Invalid base58 encoding: {e}")))?;

    if data.len() <= CHECKSUM_LEN {
        return Err(WalletError::Format(format!("Encoded value too short: {encoded}")));
    }

    let (payload, actual_checksum) = data.split_at(data.len() - CHECKSUM_LEN);
    if checksum(payload) != actual_checksum {
        return Err(WalletError::Format(format!("Checksum mismatch for {encoded}")));
    }
    Ok(payload.to_vec())
}
