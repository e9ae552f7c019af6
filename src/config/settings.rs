use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub const DEFAULT_RPC_URL: &str = "https://testnet.xrpl-labs.com/";
pub const DEFAULT_FAUCET_URL: &str = "https://faucet.altnet.rippletest.net/accounts";
pub const DEFAULT_WALLETS_FILE: &str = "wallets.json";

const RPC_URL_KEY: &str = "XRPL_RPC_URL";
const FAUCET_URL_KEY: &str = "XRPL_FAUCET_URL";
const WALLETS_FILE_KEY: &str = "WALLETS_FILE";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Build the configuration from the environment, falling back to the testnet defaults.
    pub fn new() -> Config {
        let mut map = HashMap::new();
        for (key, default) in [
            (RPC_URL_KEY, DEFAULT_RPC_URL),
            (FAUCET_URL_KEY, DEFAULT_FAUCET_URL),
            (WALLETS_FILE_KEY, DEFAULT_WALLETS_FILE),
        ] {
            let value = env::var(key).unwrap_or_else(|_| String::from(default));
            map.insert(String::from(key), value);
        }
        Config {
            inner: RwLock::new(map),
        }
    }

    fn get(&self, key: &str, default: &str) -> String {
        match self.inner.read() {
            Ok(inner) => inner.get(key).cloned().unwrap_or_else(|| default.to_string()),
            Err(poisoned) => poisoned
                .into_inner()
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string()),
        }
    }

    fn set(&self, key: &str, value: String) {
        let mut inner = match self.inner.write() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.insert(String::from(key), value);
    }

    pub fn get_rpc_url(&self) -> String {
        self.get(RPC_URL_KEY, DEFAULT_RPC_URL)
    }

    pub fn set_rpc_url(&self, url: String) {
        self.set(RPC_URL_KEY, url);
    }

    pub fn get_faucet_url(&self) -> String {
        self.get(FAUCET_URL_KEY, DEFAULT_FAUCET_URL)
    }

    pub fn set_faucet_url(&self, url: String) {
        self.set(FAUCET_URL_KEY, url);
    }

    pub fn get_wallets_file(&self) -> String {
        self.get(WALLETS_FILE_KEY, DEFAULT_WALLETS_FILE)
    }

    pub fn set_wallets_file(&self, file: String) {
        self.set(WALLETS_FILE_KEY, file);
    }

    /// Wallet document path, relative names resolved against the working directory
    pub fn wallets_path(&self) -> crate::error::Result<PathBuf> {
        let file = PathBuf::from(self.get_wallets_file());
        if file.is_absolute() {
            return Ok(file);
        }
        Ok(env::current_dir()?.join(file))
    }
}
