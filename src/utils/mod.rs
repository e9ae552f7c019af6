//! Hashing and encoding helpers shared by the seed codec and address derivation.

pub mod crypto;

pub use crypto::{
    base58check_decode, base58check_encode, hash160, ripemd160_digest, sha256_digest,
    sha512_half, CHECKSUM_LEN,
};
