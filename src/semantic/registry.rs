/// Registry of builtin function definitions, keyed by qualified name
mod builder;
mod definition;
mod table;

pub use builder::RegistryBuilder;
pub use definition::{ArgTypes, Builtin, DataType, FunctionClass, FunctionDefinition};
pub use table::FunctionRegistry;
