//! Data models for the balance bot
//!
//! Chains the bot knows about and the per-chain lookup results handed from the
//! services to the command layer.

pub mod balance;
pub mod chain;

pub use balance::BalanceResult;
pub use chain::Chain;
