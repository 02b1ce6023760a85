//! Name lookup against the standard registry.

use rstest::rstest;
use sqlfunc::{ArraySubscript, Name, NamePart, SearchPath, UnresolvedName};

use crate::helpers::registry_fixtures::path;
use crate::helpers::resolve_assertions::*;

fn dotted(text: &str) -> UnresolvedName {
    UnresolvedName::from_dotted(text)
}

// =============================================================================
// SUCCESSFUL LOOKUPS
// =============================================================================

#[rstest]
#[case("lower", "", "pg_catalog.lower")]
#[case("LOWER", "", "pg_catalog.lower")]
#[case("Count", "", "pg_catalog.count")]
#[case("pg_catalog.lower", "", "pg_catalog.lower")]
#[case("PG_CATALOG.NOW", "", "pg_catalog.now")]
#[case("pg_catalog.Transaction_Timestamp", "", "pg_catalog.transaction_timestamp")]
#[case("now", "pg_catalog", "pg_catalog.now")]
#[case("NOW", "public, pg_catalog", "pg_catalog.now")]
#[case("current_date", "public", "pg_catalog.current_date")]
fn test_resolves(#[case] name: &str, #[case] setting: &str, #[case] expected: &str) {
    assert_resolves(&dotted(name), &path(setting), expected);
}

#[test]
fn test_unqualified_alias_wins_over_search_path() {
    // `lower` hits the unqualified entry before the path is consulted.
    assert_resolves(&dotted("lower"), &path("nonexistent"), "pg_catalog.lower");
}

// =============================================================================
// UNKNOWN FUNCTIONS
// =============================================================================

#[rstest]
#[case("bogus_fn", "")]
#[case("bogus_fn", "pg_catalog")]
#[case("now", "")]
#[case("now", "public")]
#[case("public.lower", "pg_catalog")]
fn test_unknown(#[case] name: &str, #[case] setting: &str) {
    assert_unknown(&dotted(name), &path(setting));
}

#[test]
fn test_unknown_message_names_the_function() {
    let err = resolve_err(&dotted("bogus_fn"), &SearchPath::default());
    assert_eq!(err.to_string(), "unknown function: bogus_fn()");

    let err = resolve_err(&dotted("Public.Bogus"), &SearchPath::default());
    assert_eq!(err.to_string(), r#"unknown function: "Public"."Bogus"()"#);
}

// =============================================================================
// REJECTED NAMES
// =============================================================================

#[test]
fn test_empty_name_is_invalid() {
    assert_invalid(&UnresolvedName::default());
}

#[test]
fn test_leading_subscript_is_invalid() {
    let name = UnresolvedName::new(vec![NamePart::ArraySubscript(ArraySubscript::index("1"))]);
    assert_invalid(&name);
}

#[rstest]
#[case("a.b.c")]
#[case("db.pg_catalog.now")]
fn test_too_many_parts_is_invalid(#[case] name: &str) {
    assert_invalid(&dotted(name));
}

#[test]
fn test_zero_length_qualifier_is_invalid() {
    let name = UnresolvedName::new(vec![
        NamePart::Name(Name::default()),
        NamePart::Name(Name::new("now")),
    ]);
    let err = resolve_err(&name, &path("pg_catalog"));
    assert_eq!(err.to_string(), r#"invalid function name: "".now"#);
}

#[test]
fn test_star_is_invalid() {
    assert_invalid(&dotted("pg_catalog").with_part(NamePart::Star));
}

#[rstest]
#[case(dotted("lower").with_part(ArraySubscript::index("1")))]
#[case(dotted("pg_catalog.now").with_part(ArraySubscript::slice("1", "2")))]
#[case(dotted("bogus_fn").with_part(ArraySubscript::index("1")))]
#[case(
    dotted("count")
        .with_part(ArraySubscript::index("1"))
        .with_part(NamePart::Name(Name::new("field")))
)]
fn test_selector_is_unsupported(#[case] name: UnresolvedName) {
    assert_unsupported(&name, &path("pg_catalog"));
}
