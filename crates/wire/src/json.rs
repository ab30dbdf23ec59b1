//! JSON encoding for wire records

use crate::query::CubeQuery;
use thiserror::Error;

/// Decode error types
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Input was empty or whitespace
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// Invalid JSON syntax, or a field of the wrong type
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

/// Encode a query as compact JSON.
pub fn encode_query(query: &CubeQuery) -> Result<String, serde_json::Error> {
    serde_json::to_string(query)
}

/// Encode a query as indented JSON.
pub fn encode_query_pretty(query: &CubeQuery) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(query)
}

/// Decode a query from JSON.
pub fn decode_query(json: &str) -> Result<CubeQuery, DecodeError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::UnexpectedEnd);
    }
    serde_json::from_str(trimmed).map_err(|e| DecodeError::InvalidJson(e.to_string()))
}
