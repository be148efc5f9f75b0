//! Entitlement string grammar.
//!
//! Accepted shapes:
//! - Long:   `<resource>:<resourceName>:<verb>`, e.g. `pages:/foo:read`
//! - Medium: `<resource>::<verb>`, same as `<resource>:*:<verb>`
//! - Short:  `<resource>:<verb>`, same as `<resource>:*:<verb>`
//! - Opaque: anything else, e.g. `email` or `a:b:c:d`; only matches exactly
//!
//! A verb of `all` grants every verb on the resource. An empty or `*`
//! resource name is a wildcard over all instances.

use std::fmt::{Display, Formatter, Result as FmtResult};

use strum::{AsRefStr, Display as StrumDisplay};

/// The verb that grants every other verb.
pub const ALL_VERB: &str = "all";

/// Explicit resource-name wildcard. An empty name means the same thing.
pub const WILDCARD_NAME: &str = "*";

/// The verb used by synthesized identity requirements.
pub const READ_VERB: &str = "read";

/// A borrowed, canonicalized view of an entitlement string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entitlement<'a> {
    /// A `resource:name:verb` triple. Short form strings carry an empty name.
    Structured {
        resource: &'a str,
        name: &'a str,
        verb: &'a str,
        form: EntitlementForm,
    },
    /// A token with no structure, compared byte for byte.
    Opaque(&'a str),
}

/// How an entitlement string was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum EntitlementForm {
    Opaque,
    Short,
    Medium,
    Long,
}

impl<'a> Entitlement<'a> {
    /// Canonicalize `raw` into three fields, or classify it as opaque.
    ///
    /// This never fails: strings with one field or four or more fields are opaque.
    pub fn parse(raw: &'a str) -> Self {
        let mut fields = raw.split(':');
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(resource), Some(verb), None, None) => Entitlement::Structured {
                resource,
                name: "",
                verb,
                form: EntitlementForm::Short,
            },
            (Some(resource), Some(name), Some(verb), None) => Entitlement::Structured {
                resource,
                name,
                verb,
                form: if is_wildcard_name(name) {
                    EntitlementForm::Medium
                } else {
                    EntitlementForm::Long
                },
            },
            _ => Entitlement::Opaque(raw),
        }
    }

    /// The shape the string was written in.
    pub fn form(&self) -> EntitlementForm {
        match self {
            Entitlement::Structured { form, .. } => *form,
            Entitlement::Opaque(_) => EntitlementForm::Opaque,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Entitlement::Opaque(_))
    }

    /// Build the long-form read entitlement for one resource instance.
    pub fn identity(resource: &str, resource_name: &str) -> String {
        format!("{resource}:{resource_name}:{READ_VERB}")
    }
}

impl Display for Entitlement<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Entitlement::Structured {
                resource,
                name,
                verb,
                ..
            } => write!(f, "{resource}:{name}:{verb}"),
            Entitlement::Opaque(raw) => write!(f, "{raw}"),
        }
    }
}

/// True for the empty name and for `*`.
pub(crate) fn is_wildcard_name(name: &str) -> bool {
    name.is_empty() || name == WILDCARD_NAME
}
