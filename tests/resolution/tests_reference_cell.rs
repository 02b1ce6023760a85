//! Reference cell behaviour against the standard registry.

use std::sync::Arc;

use sqlfunc::{ResolvableFunctionReference, ResolveError, SearchPath};

use crate::helpers::registry_fixtures::{path, reference, registry};

#[test]
fn test_first_successful_resolution_is_kept() {
    let mut func = reference("now");

    let first = func.resolve(registry(), &path("pg_catalog")).unwrap();
    // A session that later changes its search path still gets the bound function.
    let second = func.resolve(registry(), &path("public")).unwrap();

    assert_eq!(first.name(), "pg_catalog.now");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_retry_after_failure() {
    let mut func = reference("now");

    let err = func.resolve(registry(), &SearchPath::default()).unwrap_err();
    assert_eq!(err, ResolveError::UnknownFunction("now".to_string()));
    assert!(!func.is_resolved());

    let definition = func.resolve(registry(), &path("pg_catalog")).unwrap();
    assert_eq!(definition.name(), "pg_catalog.now");
    assert!(func.is_resolved());
}

#[test]
fn test_grammar_helper_needs_no_search_path() {
    let mut func =
        ResolvableFunctionReference::wrap_function(registry(), "pg_catalog.now").unwrap();
    assert!(func.is_resolved());

    let definition = func.resolve(registry(), &SearchPath::default()).unwrap();
    assert_eq!(definition.name(), "pg_catalog.now");
}

#[test]
fn test_grammar_helper_unknown_builtin() {
    let err = ResolvableFunctionReference::wrap_function(registry(), "now").unwrap_err();
    assert_eq!(err, ResolveError::UndefinedBuiltin("now".to_string()));
}

#[test]
fn test_rendering_before_and_after() {
    let mut func = reference("COUNT");
    assert_eq!(func.to_string(), r#""COUNT""#);

    func.resolve(registry(), &SearchPath::default()).unwrap();
    assert_eq!(func.to_string(), "pg_catalog.count");
}
