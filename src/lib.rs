//! Matching of compact entitlement strings against scheme-keyed access requirements.
//!
//! A principal holds [`Entitlements`]: scheme name to entitlement strings such as
//! `pages:/foo:read`, `pages:all` or the opaque `email`. A protected resource
//! declares [`Requirements`]: alternatives (OR), each requiring every listed
//! scheme (AND) and every string under it (AND). The [`EntitlementEvaluator`]
//! turns the two into an allow/deny boolean.

pub use config::{DEFAULT_SCHEME, EvaluatorConfig};
pub use error::EntitlementError;
pub use evaluator::EntitlementEvaluator;
pub use loader::{parse_config, parse_entitlements, parse_requirements};
pub use types::{
    ALL_VERB, Entitlement, EntitlementForm, Entitlements, READ_VERB, RequirementSet,
    Requirements, WILDCARD_NAME,
};

mod config;
mod error;
mod evaluator;
mod loader;
mod matching;
mod types;
