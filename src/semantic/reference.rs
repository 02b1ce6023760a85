//! Resolvable function references.
//!
//! A function call node owns a [`ResolvableFunctionReference`]. The parser
//! fills it with the name as written; the first successful
//! [`resolve`](ResolvableFunctionReference::resolve) replaces that name with
//! the registered definition, and every later call returns the stored
//! definition without looking at the registry or the search path again.
//! A failed attempt leaves the name in place so the caller may retry.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::semantic::error::{ResolveError, ResolveResult};
use crate::semantic::registry::{FunctionDefinition, FunctionRegistry};
use crate::semantic::resolver::Resolver;
use crate::semantic::search_path::SearchPath;
use crate::syntax::{FormatOptions, NodeFormatter, UnresolvedName, format_node};

/// What a function reference currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionReference {
    /// The name as written, not yet resolved.
    Unresolved(UnresolvedName),
    /// The definition the name resolved to.
    Resolved(Arc<FunctionDefinition>),
}

/// The function reference cell of a call node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvableFunctionReference {
    reference: FunctionReference,
}

impl ResolvableFunctionReference {
    /// A reference that still has to be resolved.
    pub fn new(name: UnresolvedName) -> Self {
        Self {
            reference: FunctionReference::Unresolved(name),
        }
    }

    /// A reference that is already resolved to `definition`.
    pub fn from_definition(definition: Arc<FunctionDefinition>) -> Self {
        Self {
            reference: FunctionReference::Resolved(definition),
        }
    }

    /// Pre-resolved reference for a builtin the grammar names directly.
    ///
    /// `qualified_name` is looked up verbatim, without normalization or
    /// search path.
    pub fn wrap_function(registry: &FunctionRegistry, qualified_name: &str) -> ResolveResult<Self> {
        registry
            .lookup(qualified_name)
            .map(|definition| Self::from_definition(Arc::clone(definition)))
            .ok_or_else(|| ResolveError::UndefinedBuiltin(qualified_name.to_string()))
    }

    pub fn reference(&self) -> &FunctionReference {
        &self.reference
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.reference, FunctionReference::Resolved(_))
    }

    /// The resolved definition, if resolution already happened.
    pub fn definition(&self) -> Option<&Arc<FunctionDefinition>> {
        match &self.reference {
            FunctionReference::Resolved(definition) => Some(definition),
            FunctionReference::Unresolved(_) => None,
        }
    }

    /// Resolve the reference, caching the result on success.
    ///
    /// Once resolved, `registry` and `search_path` are ignored: a prepared
    /// statement keeps the function it was bound to even if the session's
    /// search path changes.
    pub fn resolve(
        &mut self,
        registry: &FunctionRegistry,
        search_path: &SearchPath,
    ) -> ResolveResult<Arc<FunctionDefinition>> {
        match &self.reference {
            FunctionReference::Resolved(definition) => Ok(Arc::clone(definition)),
            FunctionReference::Unresolved(name) => {
                let definition = Resolver::new(registry).resolve(name, search_path)?;
                debug!("[FUNC_REF] '{}' resolved to {}", name, definition.name());
                self.reference = FunctionReference::Resolved(Arc::clone(&definition));
                Ok(definition)
            }
        }
    }
}

impl From<UnresolvedName> for ResolvableFunctionReference {
    fn from(name: UnresolvedName) -> Self {
        Self::new(name)
    }
}

impl NodeFormatter for FunctionReference {
    fn format(&self, buf: &mut String, options: &FormatOptions) {
        match self {
            FunctionReference::Unresolved(name) => name.format(buf, options),
            FunctionReference::Resolved(definition) => definition.format(buf, options),
        }
    }
}

impl NodeFormatter for ResolvableFunctionReference {
    fn format(&self, buf: &mut String, options: &FormatOptions) {
        self.reference.format(buf, options);
    }
}

impl fmt::Display for FunctionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_node(self, &FormatOptions::default()))
    }
}

impl fmt::Display for ResolvableFunctionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reference, f)
    }
}
