//! Structured function names.
//!
//! General syntax of a function reference:
//!
//! ```text
//! [ <prefix> . ] <function-name> [ <selector> ... ]
//! ```
//!
//! The selector is everything from the first array subscript onwards. It is
//! kept unevaluated so the resolver can reject it with a precise error.

use tracing::debug;

use crate::base::Name;
use crate::semantic::error::{ResolveError, ResolveResult};
use crate::syntax::{NamePart, UnresolvedName, normalize_table_name};

/// An [`UnresolvedName`] split into prefix, function name and selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionName {
    prefix: Name,
    function: Name,
    selector: Vec<NamePart>,
}

impl FunctionName {
    /// The namespace qualifier as written; empty when unqualified.
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// The function identifier as written.
    pub fn function(&self) -> &str {
        self.function.as_str()
    }

    pub fn selector(&self) -> &[NamePart] {
        &self.selector
    }

    pub fn has_selector(&self) -> bool {
        !self.selector.is_empty()
    }
}

/// Split `name` into its prefix, function name and selector.
///
/// The parts before the first subscript must look like a table reference
/// (`[prefix.]name`). Whatever makes them invalid, the error names the whole
/// input rather than the table-name detail.
pub fn normalize_function_name(name: &UnresolvedName) -> ResolveResult<FunctionName> {
    let parts = name.parts();
    if parts.is_empty() {
        return Err(ResolveError::invalid_name(name));
    }

    let split = parts
        .iter()
        .position(NamePart::is_array_subscript)
        .unwrap_or(parts.len());

    // Something has to come before the subscript.
    if split == 0 {
        return Err(ResolveError::invalid_name(name));
    }

    let (head, selector) = parts.split_at(split);
    let (prefix, function) = normalize_table_name(head)
        .map_err(|err| {
            debug!("[NORMALIZE_FN] '{}' rejected: {}", name, err);
            ResolveError::invalid_name(name)
        })?
        .into_parts();

    Ok(FunctionName {
        prefix,
        function,
        selector: selector.to_vec(),
    })
}
