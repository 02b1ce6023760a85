use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::definition::FunctionDefinition;

/// Qualified name -> definition, in registration order.
pub(super) type DefinitionMap = IndexMap<SmolStr, Arc<FunctionDefinition>, FxBuildHasher>;

/// Read-only map from qualified function name to definition.
///
/// Built once through [`RegistryBuilder`](super::RegistryBuilder) before any
/// query is compiled, then shared by reference. There is no way to add or
/// remove entries afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    definitions: DefinitionMap,
}

impl FunctionRegistry {
    pub(super) fn from_map(definitions: DefinitionMap) -> Self {
        Self { definitions }
    }

    /// Look up a definition by its exact registered name.
    pub fn lookup(&self, qualified_name: &str) -> Option<&Arc<FunctionDefinition>> {
        self.definitions.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.definitions.contains_key(qualified_name)
    }

    /// Number of registered names, aliases included.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All registered names (aliases included) in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(SmolStr::as_str)
    }
}
