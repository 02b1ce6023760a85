mod function_name;
mod function_resolver;

pub use function_name::{FunctionName, normalize_function_name};
pub use function_resolver::Resolver;
