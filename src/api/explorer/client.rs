use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::{ApiError, BalanceResponse};
use crate::config::ExplorerConfig;
use crate::models::chain::{Chain, NATIVE_DECIMALS};

/// Etherscan-family explorer client for one chain
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http_client: HttpClient,
    chain: Chain,
    api_key: Option<String>,
    base_url: String,
}

impl ExplorerClient {
    /// Create a client for `chain` that gives up on requests after `timeout`
    pub fn new(chain: Chain, config: &ExplorerConfig, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            chain,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// Query parameters for the balance call. The address goes out verbatim.
    fn balance_query<'a>(&'a self, address: &'a str, api_key: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut query = vec![
            ("module", "account"),
            ("action", "balance"),
            ("address", address),
        ];
        if self.chain.uses_latest_tag() {
            query.push(("tag", "latest"));
        }
        query.push(("apikey", api_key));
        query
    }

    /// GET ?module=account&action=balance
    ///
    /// Returns the native balance of `address` in whole coins.
    ///
    /// # Returns
    /// * `Ok(f64)` - Balance converted from wei
    /// * `Err(ApiError)` - Missing key, network failure, bad status or unusable body
    pub async fn get_native_balance(&self, address: &str) -> Result<f64, ApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey(self.chain))?;

        debug!("Querying {} balance for {}", self.chain.explorer_name(), address);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&self.balance_query(address, api_key))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_timeout() {
                    ApiError::Timeout(e.to_string())
                } else {
                    ApiError::RequestError(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpError(status.as_u16(), body_text));
        }

        let body = response
            .json::<BalanceResponse>()
            .await
            .map_err(|e| {
                ApiError::DeserializationError(format!("Failed to parse response: {}", e.without_url()))
            })?;

        parse_balance(&body)
    }
}

/// Read `result` as wei and convert it to whole coins.
pub fn parse_balance(body: &BalanceResponse) -> Result<f64, ApiError> {
    let invalid = |value: String| ApiError::InvalidBalance {
        value,
        message: body.message.clone().unwrap_or_default(),
    };

    let raw = match &body.result {
        None | Some(serde_json::Value::Null) => return Err(ApiError::MissingResult),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => return Err(invalid(other.to_string())),
    };

    let wei = raw.trim().parse::<u128>().map_err(|_| invalid(raw.clone()))?;
    Ok(wei_to_coins(wei))
}

/// Smallest unit to whole coins; precision loss on huge values is accepted.
pub fn wei_to_coins(wei: u128) -> f64 {
    wei as f64 / 10f64.powi(NATIVE_DECIMALS)
}
