//! Access requirements: an OR over entries, each an AND over schemes.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entitlements::fmt_scheme_map;

/// One alternative in [`Requirements`].
///
/// Every scheme key must be present in the held entitlements, and every
/// string listed under it must be matched by an entitlement of that scheme.
/// A scheme mapped to an empty list only requires the scheme to be present.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct RequirementSet(HashMap<String, Vec<String>>);

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RequirementSet::require`].
    pub fn with_scheme<S, I, E>(mut self, scheme: S, required: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.require(scheme, required);
        self
    }

    /// Append required strings under `scheme`, creating the scheme if absent.
    pub fn require<S, I, E>(&mut self, scheme: S, required: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.0
            .entry(scheme.into())
            .or_default()
            .extend(required.into_iter().map(Into::into));
    }

    pub fn get(&self, scheme: &str) -> Option<&[String]> {
        self.0.get(scheme).map(Vec::as_slice)
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

impl From<HashMap<String, Vec<String>>> for RequirementSet {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        RequirementSet(map)
    }
}

impl<S, I, E> FromIterator<(S, I)> for RequirementSet
where
    S: Into<String>,
    I: IntoIterator<Item = E>,
    E: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let mut set = RequirementSet::new();
        for (scheme, list) in iter {
            set.require(scheme, list);
        }
        set
    }
}

impl Display for RequirementSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", fmt_scheme_map(&self.0))
    }
}

/// Alternatives, any one of which grants access. Empty means unrestricted.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct Requirements(Vec<RequirementSet>);

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: RequirementSet) -> Self {
        self.push(entry);
        self
    }

    pub fn push(&mut self, entry: RequirementSet) {
        self.0.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequirementSet> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut RequirementSet> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<RequirementSet>> for Requirements {
    fn from(entries: Vec<RequirementSet>) -> Self {
        Requirements(entries)
    }
}

impl FromIterator<RequirementSet> for Requirements {
    fn from_iter<T: IntoIterator<Item = RequirementSet>>(iter: T) -> Self {
        Requirements(iter.into_iter().collect())
    }
}

impl Display for Requirements {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.0.is_empty() {
            return write!(f, "[]");
        }
        write!(f, "{}", self.0.iter().join(" | "))
    }
}
