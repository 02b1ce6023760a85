use std::sync::Arc;

use tracing::trace;

use super::function_name::normalize_function_name;
use crate::semantic::error::{ResolveError, ResolveResult};
use crate::semantic::registry::{FunctionDefinition, FunctionRegistry};
use crate::semantic::search_path::SearchPath;
use crate::syntax::UnresolvedName;

/// Resolver turns unresolved function names into registered definitions.
///
/// Resolution is pure: it reads the registry and the search path and never
/// mutates either, so one registry can serve any number of resolvers.
pub struct Resolver<'a> {
    registry: &'a FunctionRegistry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FunctionRegistry {
        self.registry
    }

    /// Resolve `name` against the registry.
    ///
    /// Order: case-exact unqualified lookup, then the lowercased (qualified)
    /// name, then each search path entry for unqualified names. The first hit
    /// wins.
    pub fn resolve(
        &self,
        name: &UnresolvedName,
        search_path: &SearchPath,
    ) -> ResolveResult<Arc<FunctionDefinition>> {
        let function_name = normalize_function_name(name)?;

        // Record and array access on a function reference is not supported.
        if function_name.has_selector() {
            return Err(ResolveError::unsupported_name(name));
        }

        // 1. Fast path: builtin written with its canonical spelling
        if function_name.prefix().is_empty() {
            if let Some(definition) = self.registry.lookup(function_name.function()) {
                trace!("[RESOLVE_FN] '{}' -> {} (exact)", name, definition.name());
                return Ok(Arc::clone(definition));
            }
        }

        // Function names only use characters for which simple lowercasing
        // is the correct fold.
        let prefix = function_name.prefix().to_lowercase();
        let small_name = function_name.function().to_lowercase();

        // 2. Qualified (or folded unqualified) name
        let full_name = if prefix.is_empty() {
            small_name.clone()
        } else {
            format!("{prefix}.{small_name}")
        };
        if let Some(definition) = self.registry.lookup(&full_name) {
            trace!("[RESOLVE_FN] '{}' -> {}", name, definition.name());
            return Ok(Arc::clone(definition));
        }

        // 3. Unqualified names walk the search path
        if prefix.is_empty() {
            if let Some(definition) = self.lookup_in_search_path(&small_name, search_path) {
                trace!(
                    "[RESOLVE_FN] '{}' -> {} (search path)",
                    name,
                    definition.name()
                );
                return Ok(definition);
            }
        }

        trace!("[RESOLVE_FN] '{}' not found", name);
        Err(ResolveError::unknown_function(name))
    }

    fn lookup_in_search_path(
        &self,
        small_name: &str,
        search_path: &SearchPath,
    ) -> Option<Arc<FunctionDefinition>> {
        search_path.iter().find_map(|namespace| {
            let candidate = format!("{namespace}.{small_name}");
            self.registry.lookup(&candidate).cloned()
        })
    }
}
