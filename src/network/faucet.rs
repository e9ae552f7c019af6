use crate::error::{Result, WalletError};
use crate::network::rpc::{drops_to_xrp, JsonRpcClient, HTTP_TIMEOUT_SECS};
use crate::storage::WalletRecord;
use crate::wallet::{KeyAlgorithm, Wallet};
use log::{info, warn};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::thread;
use std::time::Duration;

pub const FAUCET_USER_AGENT: &str = "xrpl-wallet-pair";
pub const FUNDING_POLL_ATTEMPTS: u32 = 40;
const FUNDING_POLL_INTERVAL_MS: u64 = 1000;

/// Source of new, funded test-network wallets
pub trait Faucet {
    fn create_funded_wallet(&self) -> Result<WalletRecord>;
}

/// Testnet faucet: the wallet is generated locally and the faucet funds its address
pub struct XrplFaucet {
    faucet_url: String,
    rpc: JsonRpcClient,
    http: Client,
    poll_interval: Duration,
    poll_attempts: u32,
}

impl XrplFaucet {
    pub fn new(faucet_url: &str, rpc_url: &str) -> Result<XrplFaucet> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(XrplFaucet {
            faucet_url: faucet_url.to_string(),
            rpc: JsonRpcClient::new(rpc_url)?,
            http,
            poll_interval: Duration::from_millis(FUNDING_POLL_INTERVAL_MS),
            poll_attempts: FUNDING_POLL_ATTEMPTS,
        })
    }

    pub fn with_polling(mut self, interval: Duration, attempts: u32) -> XrplFaucet {
        self.poll_interval = interval;
        self.poll_attempts = attempts;
        self
    }

    fn request_funding(&self, address: &str) -> Result<()> {
        let body = json!({ "destination": address, "userAgent": FAUCET_USER_AGENT });
        let response = self.http.post(&self.faucet_url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(WalletError::Network(format!(
                "Faucet at {} refused funding with HTTP {status}: {text}",
                self.faucet_url
            )));
        }

        let funded: Value = response.json()?;
        check_faucet_response(&funded, address)
    }

    fn wait_for_funding(&self, address: &str, starting_balance: u64) -> Result<u64> {
        for attempt in 1..=self.poll_attempts {
            thread::sleep(self.poll_interval);
            match self.rpc.account_info(address)? {
                Some(balance) if balance > starting_balance => return Ok(balance),
                _ => info!("Waiting for funding of {address} ({attempt}/{})", self.poll_attempts),
            }
        }
        Err(WalletError::Network(format!(
            "Faucet did not fund {address} after {} checks",
            self.poll_attempts
        )))
    }
}

impl Faucet for XrplFaucet {
    fn create_funded_wallet(&self) -> Result<WalletRecord> {
        let wallet = Wallet::create(KeyAlgorithm::Ed25519)?;
        let address = wallet.get_classic_address();

        let starting_balance = self.rpc.account_info(address)?.unwrap_or(0);
        info!("Attempting to fund address {address}");
        self.request_funding(address)?;

        let balance = self.wait_for_funding(address, starting_balance)?;
        info!(
            "Faucet fund successful, {address} holds {} XRP",
            drops_to_xrp(balance)
        );
        Ok(WalletRecord::new(wallet.get_seed(), address))
    }
}

/// The faucet echoes the funded account back; anything but our address is an error
fn check_faucet_response(response: &Value, address: &str) -> Result<()> {
    let account = response.get("account").ok_or_else(|| {
        WalletError::Network("Faucet response carried no account".to_string())
    })?;
    let funded = account
        .get("classicAddress")
        .or_else(|| account.get("address"))
        .and_then(Value::as_str);

    match funded {
        Some(funded) if funded == address => Ok(()),
        Some(funded) => Err(WalletError::Network(format!(
            "Faucet funded {funded} instead of {address}"
        ))),
        None => {
            warn!("Faucet response did not name the funded account");
            Ok(())
        }
    }
}
