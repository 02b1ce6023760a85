use std::sync::Arc;

use smol_str::SmolStr;
use tracing::trace;

use super::definition::{Builtin, FunctionDefinition};
use super::table::{DefinitionMap, FunctionRegistry};
use crate::semantic::error::RegistryError;

/// Single-threaded builder used by the startup routine.
///
/// Names are fully qualified, dotted and lowercase (`pg_catalog.now`).
/// Builtins exposed without a namespace additionally get an unqualified
/// alias pointing at the same definition.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    definitions: DefinitionMap,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new function and return its shared definition.
    pub fn register(
        &mut self,
        qualified_name: &str,
        overloads: Vec<Builtin>,
    ) -> Result<Arc<FunctionDefinition>, RegistryError> {
        self.check_new_name(qualified_name)?;
        let definition = Arc::new(FunctionDefinition::new(qualified_name, overloads));
        self.definitions
            .insert(SmolStr::new(qualified_name), Arc::clone(&definition));
        trace!(
            "[REGISTRY] registered '{}' ({} overloads)",
            qualified_name,
            definition.overloads().len()
        );
        Ok(definition)
    }

    /// Make `alias` resolve to the definition registered as `target`.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> Result<(), RegistryError> {
        self.check_new_name(alias)?;
        let definition = self.definitions.get(target).cloned().ok_or_else(|| {
            RegistryError::UnknownTarget {
                alias: alias.to_string(),
                target: target.to_string(),
            }
        })?;
        self.definitions.insert(SmolStr::new(alias), definition);
        trace!("[REGISTRY] alias '{}' -> '{}'", alias, target);
        Ok(())
    }

    /// Freeze the registry.
    pub fn build(self) -> FunctionRegistry {
        FunctionRegistry::from_map(self.definitions)
    }

    fn check_new_name(&self, name: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::Empty);
        }
        if name.to_lowercase() != name {
            return Err(RegistryError::NotNormalized(name.to_string()));
        }
        if self.definitions.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        Ok(())
    }
}
