//! Runtime configuration loaded once at startup.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DISCORD_TOKEN` | Bot token for the Discord gateway | Required |
//! | `ETHERSCAN_API_KEY` | Etherscan API key | Optional |
//! | `BSCSCAN_API_KEY` | BscScan API key | Optional |
//! | `ETHERSCAN_API_URL` | Etherscan endpoint override | `https://api.etherscan.io/api` |
//! | `BSCSCAN_API_URL` | BscScan endpoint override | `https://api.bscscan.com/api` |
//! | `REQUEST_TIMEOUT_SECS` | Timeout for each explorer request | `10` |

use std::time::Duration;

use thiserror::Error;

use crate::models::Chain;

pub const DISCORD_TOKEN_ENV: &str = "DISCORD_TOKEN";
pub const ETHERSCAN_API_KEY_ENV: &str = "ETHERSCAN_API_KEY";
pub const BSCSCAN_API_KEY_ENV: &str = "BSCSCAN_API_KEY";
pub const ETHERSCAN_API_URL_ENV: &str = "ETHERSCAN_API_URL";
pub const BSCSCAN_API_URL_ENV: &str = "BSCSCAN_API_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "REQUEST_TIMEOUT_SECS";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set. Please check your .env file.")]
    Missing(&'static str),
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Explorer endpoint and credential for one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

/// Immutable bot configuration, owned by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub discord_token: String,
    pub ethereum: ExplorerConfig,
    pub bsc: ExplorerConfig,
    pub request_timeout: Duration,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should take part.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let discord_token = get(DISCORD_TOKEN_ENV).ok_or(ConfigError::Missing(DISCORD_TOKEN_ENV))?;

        let request_timeout = match get(REQUEST_TIMEOUT_ENV) {
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: REQUEST_TIMEOUT_ENV,
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            discord_token,
            ethereum: ExplorerConfig {
                base_url: get(ETHERSCAN_API_URL_ENV)
                    .unwrap_or_else(|| Chain::Ethereum.default_base_url().to_string()),
                api_key: get(ETHERSCAN_API_KEY_ENV),
            },
            bsc: ExplorerConfig {
                base_url: get(BSCSCAN_API_URL_ENV)
                    .unwrap_or_else(|| Chain::Bsc.default_base_url().to_string()),
                api_key: get(BSCSCAN_API_KEY_ENV),
            },
            request_timeout,
        })
    }

    /// Explorer settings for the given chain
    pub fn explorer(&self, chain: Chain) -> &ExplorerConfig {
        match chain {
            Chain::Ethereum => &self.ethereum,
            Chain::Bsc => &self.bsc,
        }
    }
}
