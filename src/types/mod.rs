//! Data model for held entitlements and access requirements.
//!
//! Canonical string forms:
//! - Entitlement: `resource:name:verb`, `resource::verb`, `resource:verb` or an opaque token
//! - Entitlements: `{"bearer": ["pages:read"]}`
//! - Requirements: `[{"bearer": ["pages:read"]}, {"oauth2": ["email"]}]`

mod entitlement;
mod entitlements;
mod requirements;

pub use entitlement::{ALL_VERB, Entitlement, EntitlementForm, READ_VERB, WILDCARD_NAME};
pub(crate) use entitlement::is_wildcard_name;
pub use entitlements::Entitlements;
pub use requirements::{RequirementSet, Requirements};
