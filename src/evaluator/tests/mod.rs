use super::*;
use crate::loader::{parse_entitlements, parse_requirements};
use yare::parameterized;


fn evaluator(anonymous: &[&str]) -> EntitlementEvaluator {
    EntitlementEvaluator::new(anonymous.iter().copied(), "", false)
}

fn held(text: &str) -> Entitlements {
    parse_entitlements(text).unwrap()
}

fn required(text: &str) -> Requirements {
    parse_requirements(text).unwrap()
}

#[parameterized(
    none = { r#"{}"#, r#"[]"#, true },
    opaque_no_entitlements = { r#"{}"#, r#"[{"_": ["pages"]}]"#, false },
    opaque_match = { r#"{"_": ["pages"]}"#, r#"[{"_": ["pages"]}]"#, true },
    opaque_mismatch = { r#"{"_": ["books"]}"#, r#"[{"_": ["pages"]}]"#, false },
    opaque_vs_specific_verb = { r#"{"_": ["books"]}"#, r#"[{"_": ["books:read"]}]"#, false },
    opaque_vs_all_verb = { r#"{"_": ["books"]}"#, r#"[{"_": ["books:all"]}]"#, false },
    opaque_vs_explicit_wildcard = { r#"{"_": ["books"]}"#, r#"[{"_": ["books:*:all"]}]"#, false },
    all_verb_vs_opaque = { r#"{"_": ["books:all"]}"#, r#"[{"_": ["books"]}]"#, false },
    short_match = { r#"{"_": ["pages:read"]}"#, r#"[{"_": ["pages:read"]}]"#, true },
    short_missing_second_verb = { r#"{"_": ["pages:read"]}"#, r#"[{"_": ["pages:read", "pages:write"]}]"#, false },
    short_both_verbs = { r#"{"_": ["pages:read", "pages:write"]}"#, r#"[{"_": ["pages:read", "pages:write"]}]"#, true },
    short_wrong_verb = { r#"{"_": ["pages:read"]}"#, r#"[{"_": ["pages:write"]}]"#, false },
    short_all_vs_opaque = { r#"{"_": ["pages:all"]}"#, r#"[{"_": ["pages"]}]"#, false },
    short_all_vs_all = { r#"{"_": ["pages:all"]}"#, r#"[{"_": ["pages:all"]}]"#, true },
    short_all_vs_read = { r#"{"_": ["pages:all"]}"#, r#"[{"_": ["pages:read"]}]"#, true },
    long_vs_short = { r#"{"_": ["pages:/foo:read"]}"#, r#"[{"_": ["pages:read"]}]"#, true },
    long_vs_long = { r#"{"_": ["pages:/foo:read"]}"#, r#"[{"_": ["pages:/foo:read"]}]"#, true },
    long_wrong_verb = { r#"{"_": ["pages:/foo:read"]}"#, r#"[{"_": ["pages:write"]}]"#, false },
    long_wrong_name = { r#"{"_": ["pages:/foo:read"]}"#, r#"[{"_": ["pages:/bar:read"]}]"#, false },
    long_wrong_resource = { r#"{"_": ["pages:/foo:read"]}"#, r#"[{"_": ["books:/foo:read"]}]"#, false },
    medium_vs_long = { r#"{"_": ["pages::read"]}"#, r#"[{"_": ["pages:/foo:read"]}]"#, true },
    long_vs_medium = { r#"{"_": ["pages:/foo:read"]}"#, r#"[{"_": ["pages::read"]}]"#, true },
    or_no_resource_match = { r#"{"_": ["users:/foo:read"]}"#, r#"[{"_": ["books:/foo:read"]}, {"_": ["pages:/bar:read"]}]"#, false },
    or_no_verb_match = { r#"{"_": ["users:/foo:read"]}"#, r#"[{"_": ["users:/foo:write"]}, {"_": ["users:/foo:delete"]}]"#, false },
    or_no_name_match = { r#"{"_": ["users:/foo:read"]}"#, r#"[{"_": ["users:/bar:read"]}, {"_": ["users:/baz:read"]}]"#, false },
    or_second_matches = { r#"{"_": ["users:/foo:read"]}"#, r#"[{"_": ["users:/bar:read"]}, {"_": ["users:/foo:read"]}]"#, true },
    or_across_schemes = { r#"{"oauth2": ["y"]}"#, r#"[{"bearer": ["x"]}, {"oauth2": ["y"]}]"#, true },
    and_one_scheme_missing = { r#"{"_": ["users:/foo:read"]}"#, r#"[{"_": ["users:/bar:read"], "bearer": ["users:/foo:read"]}]"#, false },
    and_all_schemes_match = { r#"{"_": ["users:/bar:read"], "bearer": ["users:/foo:read"]}"#, r#"[{"_": ["users:/bar:read"], "bearer": ["users:/foo:read"]}]"#, true },
    and_one_scheme_unmatched = { r#"{"_": ["users:/bar:read"], "bearer": ["users:/other:read"]}"#, r#"[{"_": ["users:/bar:read"], "bearer": ["users:/foo:read"]}]"#, false },
    and_wrong_scheme = { r#"{"_": ["users:/bar:read"]}"#, r#"[{"bearer": ["users:/bar:read"]}]"#, false },
    scheme_is_case_sensitive = { r#"{"Bearer": ["pages:read"]}"#, r#"[{"bearer": ["pages:read"]}]"#, false },
    presence_only = { r#"{"oauth2": []}"#, r#"[{"oauth2": []}]"#, true },
    presence_only_missing = { r#"{"_": ["pages:read"]}"#, r#"[{"oauth2": []}]"#, false },
    empty_entry = { r#"{}"#, r#"[{}]"#, true },
)]
fn test_verify_entitlements(entitlements: &str, requirements: &str, expected: bool) {
    let evaluator = evaluator(&[]);
    assert_eq!(
        evaluator.verify_entitlements(&held(entitlements), &required(requirements)),
        expected
    );
}

#[parameterized(
    granted_to_nobody = { r#"{}"#, r#"[{"bearer": ["pages:read"]}]"#, true },
    creates_default_scheme = { r#"{"_": ["books:read"]}"#, r#"[{"bearer": ["pages:/foo:read"]}]"#, true },
    merged_with_held = { r#"{"bearer": ["books:read"]}"#, r#"[{"bearer": ["pages:read", "books:read"]}]"#, true },
    only_default_scheme = { r#"{}"#, r#"[{"_": ["pages:read"]}]"#, false },
    does_not_raise_verb = { r#"{}"#, r#"[{"bearer": ["pages:write"]}]"#, false },
    satisfies_presence_only = { r#"{}"#, r#"[{"bearer": []}]"#, true },
)]
fn test_verify_with_anonymous(entitlements: &str, requirements: &str, expected: bool) {
    let evaluator = evaluator(&["pages:read"]);
    assert_eq!(
        evaluator.verify_entitlements(&held(entitlements), &required(requirements)),
        expected
    );
}

#[test]
fn test_anonymous_under_custom_scheme() {
    let evaluator = EntitlementEvaluator::new(["pages:read"], "_", false);
    let requirements = required(r#"[{"_": ["pages:/foo:read"]}]"#);

    assert!(evaluator.verify_entitlements(&Entitlements::new(), &requirements));
    assert!(!evaluator.verify_entitlements(
        &Entitlements::new(),
        &required(r#"[{"bearer": ["pages:read"]}]"#)
    ));
}

#[test]
fn test_matching_entry_reports_first_alternative() {
    let evaluator = evaluator(&[]);
    let entitlements = held(r#"{"bearer": ["pages:all"], "oauth2": ["email"]}"#);
    let requirements = required(
        r#"[{"bearer": ["books:read"]}, {"oauth2": ["email"]}, {"bearer": ["pages:write"]}]"#,
    );

    assert_eq!(evaluator.matching_entry(&entitlements, &requirements), Some(1));
    assert_eq!(
        evaluator.matching_entry(&entitlements, &required(r#"[{"bearer": ["books:read"]}]"#)),
        None
    );
    assert_eq!(
        evaluator.matching_entry(&entitlements, &Requirements::new()),
        None
    );
}

#[test]
fn test_default_scheme_falls_back_to_bearer() {
    assert_eq!(evaluator(&[]).default_scheme(), "bearer");
    assert_eq!(EntitlementEvaluator::default().default_scheme(), "bearer");
    assert_eq!(
        EntitlementEvaluator::new(Vec::<String>::new(), "oauth2", false).default_scheme(),
        "oauth2"
    );
}

#[test]
fn test_from_config() {
    let config = EvaluatorConfig {
        anonymous_entitlements: vec!["pages:read".to_string()],
        default_scheme: String::new(),
        grant_read_by_default: true,
    };

    let evaluator = EntitlementEvaluator::from_config(&config);
    assert_eq!(evaluator.anonymous_entitlements(), &["pages:read".to_string()]);
    assert_eq!(evaluator.default_scheme(), "bearer");
    assert!(evaluator.grants_read_by_default());

    assert_eq!(EntitlementEvaluator::from(config), evaluator);
}

#[test]
fn test_default_evaluator() {
    let evaluator = EntitlementEvaluator::default();
    assert!(evaluator.anonymous_entitlements().is_empty());
    assert!(!evaluator.grants_read_by_default());
}
