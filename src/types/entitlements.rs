//! Entitlements held by a principal, grouped by scheme.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Scheme name (e.g. `bearer`) to the entitlement strings held under it.
///
/// Order within a scheme does not affect matching. Scheme keys are compared
/// case-sensitively.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct Entitlements(HashMap<String, Vec<String>>);

impl Entitlements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Entitlements::grant`].
    pub fn with_scheme<S, I, E>(mut self, scheme: S, entitlements: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.grant(scheme, entitlements);
        self
    }

    /// Append entitlements under `scheme`, creating the scheme if absent.
    pub fn grant<S, I, E>(&mut self, scheme: S, entitlements: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.0
            .entry(scheme.into())
            .or_default()
            .extend(entitlements.into_iter().map(Into::into));
    }

    /// The entitlements held under `scheme`, if the scheme is present at all.
    pub fn get(&self, scheme: &str) -> Option<&[String]> {
        self.0.get(scheme).map(Vec::as_slice)
    }

    pub fn contains_scheme(&self, scheme: &str) -> bool {
        self.0.contains_key(scheme)
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of schemes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for Entitlements {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Entitlements(map)
    }
}

impl<S, I, E> FromIterator<(S, I)> for Entitlements
where
    S: Into<String>,
    I: IntoIterator<Item = E>,
    E: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let mut entitlements = Entitlements::new();
        for (scheme, list) in iter {
            entitlements.grant(scheme, list);
        }
        entitlements
    }
}

impl Display for Entitlements {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", fmt_scheme_map(&self.0))
    }
}

/// Render a scheme map with sorted keys, e.g. `{bearer: [pages:read]}`.
pub(crate) fn fmt_scheme_map(map: &HashMap<String, Vec<String>>) -> String {
    let schemes = map
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(scheme, list)| format!("{scheme}: [{}]", list.join(", ")))
        .join(", ");
    format!("{{{schemes}}}")
}
