//! # sqlfunc
//!
//! Function-name resolution for the expression-binding phase of a SQL
//! compiler: turns a possibly qualified, possibly malformed reference such as
//! `pg_catalog.now`, `NOW` or `count` into a registered function definition,
//! honoring the query's search path and caching the result on the call node.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! semantic  → Registry, search path, resolver, resolvable references
//!   ↓
//! syntax    → Unresolved names, table-name validation, rendering
//!   ↓
//! base      → Identifiers (Name), identifier classification
//! ```
//!
//! ## Example
//!
//! ```
//! use sqlfunc::{ResolvableFunctionReference, SearchPath, UnresolvedName, standard_registry};
//!
//! let registry = standard_registry().unwrap();
//! let mut func = ResolvableFunctionReference::new(UnresolvedName::from_dotted("now"));
//!
//! let search_path = SearchPath::parse("pg_catalog, public").unwrap();
//! let definition = func.resolve(&registry, &search_path).unwrap();
//! assert_eq!(definition.name(), "pg_catalog.now");
//! assert_eq!(func.to_string(), "pg_catalog.now");
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → semantic)
// ============================================================================

/// Foundation types: Name, identifier classification
pub mod base;

/// Syntax: unresolved names, table-name validation, rendering
pub mod syntax;

/// Semantic: registry, search path, resolver, reference cells
pub mod semantic;

// Re-export foundation types
pub use base::Name;

// Re-export the syntax surface used by the parser and printer
pub use syntax::{ArraySubscript, FormatOptions, NamePart, NodeFormatter, UnresolvedName};

// Re-export the resolution surface used by the expression binder
pub use semantic::{
    FunctionDefinition, FunctionRegistry, RegistryBuilder, ResolvableFunctionReference,
    ResolveError, Resolver, SearchPath, standard_registry,
};
