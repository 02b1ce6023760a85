//! Registry and reference fixtures.

use once_cell::sync::Lazy;
use sqlfunc::{
    FunctionRegistry, ResolvableFunctionReference, SearchPath, UnresolvedName, standard_registry,
};

/// The standard registry, built once for all tests.
static SHARED_REGISTRY: Lazy<FunctionRegistry> =
    Lazy::new(|| standard_registry().expect("standard registry should build"));

pub fn registry() -> &'static FunctionRegistry {
    &SHARED_REGISTRY
}

/// An unresolved reference built from dotted text.
pub fn reference(text: &str) -> ResolvableFunctionReference {
    ResolvableFunctionReference::new(UnresolvedName::from_dotted(text))
}

/// A search path parsed from its session-setting form.
pub fn path(setting: &str) -> SearchPath {
    SearchPath::parse(setting)
        .unwrap_or_else(|err| panic!("bad search_path '{}': {}", setting, err))
}
