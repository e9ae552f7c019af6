//! Create-then-persist and load-then-reconstruct for the wallet pair

pub mod loader;
pub mod provisioner;

pub use loader::{load_wallet_pair, WalletPair};
pub use provisioner::provision_wallet_pair;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use crate::testnet::{StubDeriver, StubFaucet};
    use crate::wallet::SeedDeriver;
    use tempfile::tempdir;

    #[test]
    fn test_provision_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        let faucet = StubFaucet::with_real_seeds();

        let document = provision_wallet_pair(&faucet, &path).unwrap();
        let pair = load_wallet_pair(&SeedDeriver, &path).unwrap();

        assert_eq!(
            pair.wallet_a.get_classic_address(),
            document.wallet_a.classic_address
        );
        assert_eq!(
            pair.wallet_b.get_classic_address(),
            document.wallet_b.classic_address
        );
        assert_ne!(document.wallet_a.seed, document.wallet_b.seed);
    }

    #[test]
    fn test_load_twice_is_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        provision_wallet_pair(&StubFaucet::with_real_seeds(), &path).unwrap();

        let first = load_wallet_pair(&SeedDeriver, &path).unwrap();
        let second = load_wallet_pair(&SeedDeriver, &path).unwrap();
        assert_eq!(
            first.wallet_a.get_classic_address(),
            second.wallet_a.get_classic_address()
        );
        assert_eq!(
            first.wallet_b.get_classic_address(),
            second.wallet_b.get_classic_address()
        );
    }

    #[test]
    fn test_second_faucet_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        let faucet = StubFaucet::failing_after(1);

        let result = provision_wallet_pair(&faucet, &path);
        assert!(matches!(result, Err(WalletError::Network(_))));
        assert_eq!(faucet.calls(), 2);
        assert!(!path.exists());
    }

    #[test]
    fn test_duplicate_seed_is_not_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        let faucet = StubFaucet::fixed(vec![("sSAME", "rAAA"), ("sSAME", "rBBB")]);

        let result = provision_wallet_pair(&faucet, &path);
        assert_eq!(result.unwrap_err(), WalletError::DuplicateSeed);
        assert!(!path.exists());
    }

    #[test]
    fn test_address_mismatch_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        provision_wallet_pair(
            &StubFaucet::fixed(vec![("sA1", "rAAA"), ("sB1", "rBBB")]),
            &path,
        )
        .unwrap();

        let deriver = StubDeriver::new(vec![("sA1", "rAAA"), ("sB1", "rZZZ")]);
        let err = load_wallet_pair(&deriver, &path).unwrap_err();
        match err {
            WalletError::Format(msg) => assert!(msg.starts_with("wallet_b")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_undecodable_seed_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        provision_wallet_pair(
            &StubFaucet::fixed(vec![("sNotAValidSeed", "rAAA"), ("sAlsoBad", "rBBB")]),
            &path,
        )
        .unwrap();

        let err = load_wallet_pair(&SeedDeriver, &path).unwrap_err();
        match err {
            WalletError::Format(msg) => assert!(msg.starts_with("wallet_a")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
