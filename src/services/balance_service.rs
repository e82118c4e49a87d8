use tracing::{info, warn};

use crate::api::explorer::{ApiError, ExplorerClient};
use crate::config::Config;
use crate::models::{BalanceResult, Chain};

/// Explorer clients for every supported chain, built once at startup
#[derive(Debug, Clone)]
pub struct BalanceService {
    ethereum: ExplorerClient,
    bsc: ExplorerClient,
}

impl BalanceService {
    pub fn new(ethereum: ExplorerClient, bsc: ExplorerClient) -> Self {
        Self { ethereum, bsc }
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = |chain: Chain| ExplorerClient::new(chain, config.explorer(chain), config.request_timeout);
        Ok(Self::new(client(Chain::Ethereum)?, client(Chain::Bsc)?))
    }

    /// Look up `address` on both chains concurrently.
    ///
    /// Results come back in `Chain::ALL` order. Failures are logged and turn
    /// into an empty balance; they never abort the other lookup.
    pub async fn get_balances(&self, address: &str) -> Vec<BalanceResult> {
        let (ethereum, bsc) = tokio::join!(
            fetch_balance(&self.ethereum, address),
            fetch_balance(&self.bsc, address),
        );
        vec![ethereum, bsc]
    }
}

/// Single lookup that swallows errors into `balance: None`
pub async fn fetch_balance(client: &ExplorerClient, address: &str) -> BalanceResult {
    let chain = client.chain();
    let balance = match client.get_native_balance(address).await {
        Ok(balance) => Some(balance),
        Err(e) => {
            warn!("Error fetching {} balance: {}", chain, e);
            None
        }
    };
    BalanceResult { chain, balance }
}

/// Reply lines for a wallet address, one per chain
pub async fn check_wallet(service: &BalanceService, address: &str) -> Vec<String> {
    info!("Received wallet address: {}", address);

    service
        .get_balances(address)
        .await
        .iter()
        .map(BalanceResult::message)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use crate::test_support::MockExplorer;
    use std::time::Duration;

    const DEAD: &str = "0x0000000000000000000000000000000000dEaD";

    fn explorer(chain: Chain, server: &MockExplorer) -> ExplorerClient {
        let config = ExplorerConfig {
            base_url: server.base_url(),
            api_key: Some("key".to_string()),
        };
        ExplorerClient::new(chain, &config, Duration::from_millis(300)).unwrap()
    }

    fn service(eth: &MockExplorer, bsc: &MockExplorer) -> BalanceService {
        BalanceService::new(explorer(Chain::Ethereum, eth), explorer(Chain::Bsc, bsc))
    }

    #[tokio::test]
    async fn test_both_chains_answer() {
        let eth = MockExplorer::start(200, r#"{"status":"1","message":"OK","result":"2500000000000000000"}"#).await;
        let bsc = MockExplorer::start(200, r#"{"status":"1","message":"OK","result":"0"}"#).await;

        let replies = check_wallet(&service(&eth, &bsc), DEAD).await;
        assert_eq!(replies, vec!["Ethereum Balance: 2.5 ETH", "BSC Balance: 0.0 BNB"]);
    }

    #[tokio::test]
    async fn test_timeout_degrades_to_zero() {
        let eth = MockExplorer::start_delayed(200, r#"{"result":"1000000000000000000"}"#, Duration::from_secs(5)).await;
        let bsc = MockExplorer::start(200, r#"{"status":"1","message":"OK","result":"500000000000000000"}"#).await;

        let replies = check_wallet(&service(&eth, &bsc), DEAD).await;
        assert_eq!(replies, vec!["Ethereum Balance: 0 ETH", "BSC Balance: 0.5 BNB"]);
    }

    #[tokio::test]
    async fn test_both_failures_still_reply_twice() {
        let eth = MockExplorer::start(500, "boom").await;
        let bsc = MockExplorer::start(200, r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#).await;

        let results = service(&eth, &bsc).get_balances(DEAD).await;
        assert_eq!(
            results,
            vec![
                BalanceResult { chain: Chain::Ethereum, balance: None },
                BalanceResult { chain: Chain::Bsc, balance: None },
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_address_forwarded() {
        let eth = MockExplorer::start(200, r#"{"result":"0"}"#).await;
        let bsc = MockExplorer::start(200, r#"{"result":"0"}"#).await;

        let replies = check_wallet(&service(&eth, &bsc), "").await;
        assert_eq!(replies.len(), 2);
        assert!(eth.requests()[0].contains("&address=&"));
        assert!(bsc.requests()[0].contains("&address=&"));
    }

    #[tokio::test]
    async fn test_from_config_without_keys() {
        let eth = MockExplorer::start(200, r#"{"result":"1000000000000000000"}"#).await;
        let bsc = MockExplorer::start(200, r#"{"result":"1000000000000000000"}"#).await;
        let config = Config {
            discord_token: "token".to_string(),
            ethereum: ExplorerConfig { base_url: eth.base_url(), api_key: Some("key".to_string()) },
            bsc: ExplorerConfig { base_url: bsc.base_url(), api_key: None },
            request_timeout: Duration::from_secs(1),
        };

        let service = BalanceService::from_config(&config).unwrap();
        let replies = check_wallet(&service, DEAD).await;
        assert_eq!(replies, vec!["Ethereum Balance: 1.0 ETH", "BSC Balance: 0 BNB"]);
        assert_eq!(bsc.hits(), 0);
    }
}
