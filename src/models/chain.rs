//! Supported chains

use std::fmt;

/// Native asset decimals shared by both supported chains
pub const NATIVE_DECIMALS: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Ethereum,
    Bsc,
}

impl Chain {
    /// Order in which balances are reported
    pub const ALL: [Chain; 2] = [Chain::Ethereum, Chain::Bsc];

    /// Label shown to users in balance replies
    pub fn label(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Bsc => "BSC",
        }
    }

    /// Native asset symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            Chain::Bsc => "BNB",
        }
    }

    /// Public block-explorer API endpoint
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Chain::Ethereum => "https://api.etherscan.io/api",
            Chain::Bsc => "https://api.bscscan.com/api",
        }
    }

    /// Name of the explorer serving this chain, used in diagnostics
    pub fn explorer_name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Etherscan",
            Chain::Bsc => "BscScan",
        }
    }

    /// Etherscan expects `tag=latest`, BscScan takes no tag.
    pub fn uses_latest_tag(&self) -> bool {
        matches!(self, Chain::Ethereum)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
