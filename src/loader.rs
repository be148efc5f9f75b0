use crate::config::EvaluatorConfig;
use crate::error::EntitlementError;
use crate::types::{Entitlements, Requirements};

/// Parse requirements from their JSON form: a list of scheme-keyed maps.
///
/// Malformed JSON is mapped into `EntitlementError::ParseError`. Entitlement
/// strings are not validated; ones that cannot be parsed simply never match.
///
/// Example:
/// ```rust
/// use entitlements_core::parse_requirements;
/// let requirements = parse_requirements(r#"
///     [
///         { "bearer": ["pages:read"] },
///         { "oauth2": ["email"], "bearer": [] }
///     ]
/// "#).unwrap();
/// assert_eq!(requirements.len(), 2);
/// ```
pub fn parse_requirements(text: &str) -> Result<Requirements, EntitlementError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse held entitlements from a JSON object of scheme to string list.
pub fn parse_entitlements(text: &str) -> Result<Entitlements, EntitlementError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse evaluator settings. Missing fields take their defaults.
pub fn parse_config(text: &str) -> Result<EvaluatorConfig, EntitlementError> {
    Ok(serde_json::from_str(text)?)
}
