use std::borrow::Cow;

use tracing::debug;

use crate::config::{DEFAULT_SCHEME, EvaluatorConfig};
use crate::matching::satisfies_entry;
use crate::types::{Entitlement, Entitlements, RequirementSet, Requirements};

/// Decides whether held entitlements satisfy access requirements.
///
/// The evaluator is an immutable value: its settings are fixed at construction
/// and it can be shared between threads without locking. Inputs are only ever
/// borrowed; any augmentation happens on owned copies.
///
/// ```rust
/// use entitlements_core::{EntitlementEvaluator, Entitlements, RequirementSet, Requirements};
///
/// let evaluator = EntitlementEvaluator::default();
/// let held = Entitlements::new().with_scheme("bearer", ["pages:/foo:read"]);
/// let required = Requirements::new()
///     .with_entry(RequirementSet::new().with_scheme("bearer", ["pages:read"]));
/// assert!(evaluator.verify_entitlements(&held, &required));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementEvaluator {
    anonymous_entitlements: Vec<String>,
    default_scheme: String,
    grant_read_by_default: bool,
}

impl EntitlementEvaluator {
    /// Create an evaluator.
    ///
    /// `anonymous_entitlements` are granted to every caller under `default_scheme`,
    /// which falls back to `bearer` when empty. With `grant_read_by_default`, resource
    /// checks pass the synthesized read requirement even without entitlements.
    pub fn new<I, E, S>(
        anonymous_entitlements: I,
        default_scheme: S,
        grant_read_by_default: bool,
    ) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
        S: Into<String>,
    {
        let default_scheme = default_scheme.into();
        EntitlementEvaluator {
            anonymous_entitlements: anonymous_entitlements
                .into_iter()
                .map(Into::into)
                .collect(),
            default_scheme: if default_scheme.is_empty() {
                DEFAULT_SCHEME.to_string()
            } else {
                default_scheme
            },
            grant_read_by_default,
        }
    }

    pub fn from_config(config: &EvaluatorConfig) -> Self {
        Self::new(
            config.anonymous_entitlements.iter().cloned(),
            config.default_scheme.as_str(),
            config.grant_read_by_default,
        )
    }

    pub fn anonymous_entitlements(&self) -> &[String] {
        &self.anonymous_entitlements
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    pub fn grants_read_by_default(&self) -> bool {
        self.grant_read_by_default
    }

    /// Check `entitlements` against `requirements`.
    ///
    /// Entries of `requirements` are alternatives; the first one fully satisfied
    /// grants access. No requirements at all means access is granted.
    pub fn verify_entitlements(
        &self,
        entitlements: &Entitlements,
        requirements: &Requirements,
    ) -> bool {
        if requirements.is_empty() {
            debug!(event = "Verify", phase = "Unrestricted", allowed = true);
            return true;
        }

        self.matching_entry(entitlements, requirements).is_some()
    }

    /// Index of the first entry in `requirements` that `entitlements` satisfy,
    /// after anonymous entitlements are added.
    ///
    /// Returns `None` for an empty `requirements`, even though
    /// [`verify_entitlements`](Self::verify_entitlements) grants that case.
    pub fn matching_entry(
        &self,
        entitlements: &Entitlements,
        requirements: &Requirements,
    ) -> Option<usize> {
        let entitlements = self.with_anonymous(entitlements);

        let matched = requirements
            .iter()
            .position(|entry| satisfies_entry(&entitlements, entry));

        debug!(
            event = "Verify",
            phase = "Result",
            entitlements = %entitlements,
            requirements = %requirements,
            matched = ?matched,
            allowed = matched.is_some()
        );

        matched
    }

    /// Check access to one resource instance.
    ///
    /// Every alternative in `requirements` additionally needs the identity
    /// requirement `resource:resource_name:read` under the default scheme. With no
    /// requirements, the identity requirement is the only one.
    pub fn verify_resource_entitlements(
        &self,
        resource: &str,
        resource_name: &str,
        entitlements: &Entitlements,
        requirements: &Requirements,
    ) -> bool {
        let identity = Entitlement::identity(resource, resource_name);

        let mut requirements = requirements.clone();
        if requirements.is_empty() {
            requirements.push(
                RequirementSet::new()
                    .with_scheme(self.default_scheme.as_str(), [identity.as_str()]),
            );
        } else {
            for entry in requirements.iter_mut() {
                entry.require(self.default_scheme.as_str(), [identity.as_str()]);
            }
        }

        let entitlements = if self.grant_read_by_default {
            Cow::Owned(
                entitlements
                    .clone()
                    .with_scheme(self.default_scheme.as_str(), [identity.as_str()]),
            )
        } else {
            Cow::Borrowed(entitlements)
        };

        debug!(
            event = "Verify",
            phase = "Identity",
            identity = %identity,
            scheme = %self.default_scheme,
            granted_by_default = self.grant_read_by_default
        );

        self.verify_entitlements(&entitlements, &requirements)
    }

    /// The caller's entitlements plus the anonymous ones, borrowed when there is
    /// nothing to add.
    fn with_anonymous<'a>(&self, entitlements: &'a Entitlements) -> Cow<'a, Entitlements> {
        if self.anonymous_entitlements.is_empty() {
            return Cow::Borrowed(entitlements);
        }

        let mut augmented = entitlements.clone();
        augmented.grant(
            self.default_scheme.as_str(),
            self.anonymous_entitlements.iter().map(String::as_str),
        );
        Cow::Owned(augmented)
    }
}

impl Default for EntitlementEvaluator {
    fn default() -> Self {
        Self::from_config(&EvaluatorConfig::default())
    }
}

impl From<EvaluatorConfig> for EntitlementEvaluator {
    fn from(config: EvaluatorConfig) -> Self {
        Self::new(
            config.anonymous_entitlements,
            config.default_scheme,
            config.grant_read_by_default,
        )
    }
}

#[cfg(test)]
mod tests;
