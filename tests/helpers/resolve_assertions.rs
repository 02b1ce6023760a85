//! Resolution assertion helpers.

use std::sync::Arc;

use sqlfunc::{FunctionDefinition, ResolveError, Resolver, SearchPath, UnresolvedName};

use super::registry_fixtures::registry;

/// Resolve `name` and assert it lands on `expected`. Returns the definition.
pub fn assert_resolves(
    name: &UnresolvedName,
    search_path: &SearchPath,
    expected: &str,
) -> Arc<FunctionDefinition> {
    let definition = Resolver::new(registry())
        .resolve(name, search_path)
        .unwrap_or_else(|err| panic!("Expected '{}' to resolve, got: {}", name, err));
    assert_eq!(
        definition.name(),
        expected,
        "'{}' with search_path '{}'",
        name,
        search_path
    );
    definition
}

/// Resolve `name` and return the error, failing if it resolves.
pub fn resolve_err(name: &UnresolvedName, search_path: &SearchPath) -> ResolveError {
    match Resolver::new(registry()).resolve(name, search_path) {
        Ok(definition) => panic!(
            "Expected '{}' to fail, resolved to {}",
            name,
            definition.name()
        ),
        Err(err) => err,
    }
}

pub fn assert_unknown(name: &UnresolvedName, search_path: &SearchPath) {
    let err = resolve_err(name, search_path);
    assert!(
        matches!(err, ResolveError::UnknownFunction(_)),
        "Expected unknown function for '{}', got: {:?}",
        name,
        err
    );
}

pub fn assert_invalid(name: &UnresolvedName) {
    let err = resolve_err(name, &SearchPath::default());
    assert!(
        matches!(err, ResolveError::InvalidName(_)),
        "Expected invalid name for '{}', got: {:?}",
        name,
        err
    );
}

pub fn assert_unsupported(name: &UnresolvedName, search_path: &SearchPath) {
    let err = resolve_err(name, search_path);
    assert!(
        matches!(err, ResolveError::UnsupportedName(_)),
        "Expected unsupported name for '{}', got: {:?}",
        name,
        err
    );
}
