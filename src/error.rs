use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning collaborator-supplied documents into typed inputs.
///
/// Evaluation itself never fails; malformed entitlement strings simply do not match.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntitlementError {
    #[error("failed to parse document: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for EntitlementError {
    fn from(err: serde_json::Error) -> Self {
        EntitlementError::ParseError(err.to_string())
    }
}
