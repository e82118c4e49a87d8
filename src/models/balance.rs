//! Balance lookup models

use super::Chain;

/// Outcome of one balance lookup. `balance` is `None` when the explorer could
/// not be queried or answered with something unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResult {
    pub chain: Chain,
    pub balance: Option<f64>,
}

impl BalanceResult {
    /// Reply line for this chain, e.g. `Ethereum Balance: 2.5 ETH`.
    ///
    /// Unavailable balances render as a bare `0`.
    pub fn message(&self) -> String {
        let amount = match self.balance {
            Some(value) => format_amount(value),
            None => "0".to_string(),
        };
        format!("{} Balance: {} {}", self.chain.label(), amount, self.chain.symbol())
    }
}

/// Shortest round-trip decimal, always with a fractional part (`1.0`, `0.5`).
pub fn format_amount(value: f64) -> String {
    format!("{:?}", value)
}
