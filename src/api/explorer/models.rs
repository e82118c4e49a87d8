use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Chain;

/// Body of `module=account&action=balance` responses.
///
/// Successful calls carry the wei amount as a decimal string in `result`;
/// failures reuse the same field for an error text such as `"Invalid API Key"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub result: Option<serde_json::Value>,
}

/// Error type for explorer API operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No API key configured for this chain's explorer
    #[error("No API key configured for {}", .0.explorer_name())]
    MissingApiKey(Chain),
    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Non-success HTTP status
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Body was not the expected JSON
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
    /// JSON body had no `result` field
    #[error("Response has no result field")]
    MissingResult,
    /// `result` was not a decimal integer string
    #[error("Invalid balance value {value} ({message})")]
    InvalidBalance { value: String, message: String },
}
