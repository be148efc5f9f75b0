use tracing::trace;

use crate::types::{ALL_VERB, Entitlement, Entitlements, RequirementSet, is_wildcard_name};

/// Does the held entitlement grant the required one?
///
/// Exact equality always matches. Otherwise both sides must be structured,
/// share a resource, and agree on the verb (held `all` grants any verb).
/// A wildcard name on either side then matches any instance.
pub(crate) fn entitlement_matches(held: &str, required: &str) -> bool {
    if held == required {
        return true;
    }

    let (
        Entitlement::Structured {
            resource: held_resource,
            name: held_name,
            verb: held_verb,
            ..
        },
        Entitlement::Structured {
            resource: required_resource,
            name: required_name,
            verb: required_verb,
            ..
        },
    ) = (Entitlement::parse(held), Entitlement::parse(required))
    else {
        return false;
    };

    if held_resource != required_resource {
        return false;
    }

    if held_verb != ALL_VERB && held_verb != required_verb {
        return false;
    }

    is_wildcard_name(held_name) || is_wildcard_name(required_name) || held_name == required_name
}

/// Is `required` granted by any entitlement in `held`?
pub(crate) fn has_entitlement(held: &[String], required: &str) -> bool {
    held.iter().any(|entitlement| entitlement_matches(entitlement, required))
}

/// Are all of `required` granted by `held`? An empty list is trivially satisfied.
pub(crate) fn satisfies_requirement(held: &[String], required: &[String]) -> bool {
    required.iter().all(|requirement| {
        let matched = has_entitlement(held, requirement);
        if !matched {
            trace!(
                event = "Match",
                phase = "Unmatched",
                requirement = %requirement,
                form = %Entitlement::parse(requirement).form()
            );
        }
        matched
    })
}

/// Every scheme of `entry` must exist in `entitlements` and be satisfied there.
pub(crate) fn satisfies_entry(entitlements: &Entitlements, entry: &RequirementSet) -> bool {
    entry.iter().all(|(scheme, required)| {
        let Some(held) = entitlements.get(scheme) else {
            trace!(event = "Match", phase = "MissingScheme", scheme = scheme);
            return false;
        };
        satisfies_requirement(held, required)
    })
}
