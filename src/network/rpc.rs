use crate::error::{Result, WalletError};
use log::debug;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub const HTTP_TIMEOUT_SECS: u64 = 20;

const ACCOUNT_NOT_FOUND: &str = "actNotFound";

/// Minimal XRPL JSON-RPC client
pub struct JsonRpcClient {
    url: String,
    http: Client,
}

impl JsonRpcClient {
    pub fn new(url: &str) -> Result<JsonRpcClient> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(JsonRpcClient {
            url: url.to_string(),
            http,
        })
    }

    fn request(&self, method: &str, params: Value) -> Result<Value> {
        let body = json!({ "method": method, "params": [params] });
        debug!("JSON-RPC {method} -> {}", self.url);

        let response = self.http.post(&self.url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(WalletError::Network(format!(
                "{method} request to {} failed with HTTP {status}",
                self.url
            )));
        }

        let mut value: Value = response.json()?;
        match value.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(WalletError::Network(format!("{method} response carried no result"))),
        }
    }

    /// XRP balance in drops on the last validated ledger, `None` if the account does not exist yet
    pub fn account_info(&self, address: &str) -> Result<Option<u64>> {
        let result = self.request(
            "account_info",
            json!({ "account": address, "ledger_index": "validated" }),
        )?;
        parse_account_balance(&result)
    }
}

pub fn parse_account_balance(result: &Value) -> Result<Option<u64>> {
    if result.get("status").and_then(Value::as_str) == Some("error") {
        let code = result
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        if code == ACCOUNT_NOT_FOUND {
            return Ok(None);
        }
        let message = result
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Err(WalletError::Network(format!("account_info failed: {code} {message}")));
    }

    let balance = result
        .get("account_data")
        .and_then(|data| data.get("Balance"))
        .and_then(Value::as_str)
        .ok_or_else(|| WalletError::Network("account_info carried no balance".to_string()))?;

    balance
        .parse::<u64>()
        .map(Some)
        .map_err(|e| WalletError::Network(format!("Invalid balance {balance}: {e}")))
}

/// Render drops as XRP with six decimals
pub fn drops_to_xrp(drops: u64) -> String {
    format!("{}.{:06}", drops / 1_000_000, drops % 1_000_000)
}
