//! # Semantic Analysis
//!
//! Binds function references in expressions to registered builtin
//! definitions: the registry built at startup, the per-query search path,
//! the resolver, and the reference cell embedded in call nodes.

pub mod builtins;
pub mod error;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod search_path;

pub use builtins::{PG_CATALOG, standard_registry};
pub use error::{RegistryError, ResolveError, ResolveResult, SearchPathError};
pub use reference::{FunctionReference, ResolvableFunctionReference};
pub use registry::{
    ArgTypes, Builtin, DataType, FunctionClass, FunctionDefinition, FunctionRegistry,
    RegistryBuilder,
};
pub use resolver::{FunctionName, Resolver, normalize_function_name};
pub use search_path::SearchPath;
