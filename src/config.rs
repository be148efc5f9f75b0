use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Scheme that anonymous entitlements and identity requirements are filed under
/// when none is configured.
pub const DEFAULT_SCHEME: &str = "bearer";

/// Construction-time settings for an [`EntitlementEvaluator`](crate::EntitlementEvaluator).
///
/// Every field is optional when deserialized:
///
/// ```rust
/// use entitlements_core::EvaluatorConfig;
/// let config: EvaluatorConfig =
///     serde_json::from_str(r#"{ "anonymous_entitlements": ["pages:read"] }"#).unwrap();
/// assert_eq!(config.default_scheme, "bearer");
/// assert!(!config.grant_read_by_default);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Entitlements granted to every caller, filed under `default_scheme`.
    pub anonymous_entitlements: Vec<String>,
    /// An empty value falls back to `bearer`.
    pub default_scheme: String,
    /// Grant read on a resource instance even without any entitlements.
    pub grant_read_by_default: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            anonymous_entitlements: Vec::new(),
            default_scheme: DEFAULT_SCHEME.to_string(),
            grant_read_by_default: false,
        }
    }
}
