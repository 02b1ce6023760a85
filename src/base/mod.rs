//! Foundation types for function-name resolution.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Name`] - A single SQL identifier, spelled as written
//! - [`is_bare_identifier`], [`is_reserved_keyword`] - Identifier classification
//!
//! This module has NO dependencies on other sqlfunc modules.

mod ident;
mod name;

pub use ident::{is_bare_identifier, is_reserved_keyword};
pub use name::Name;
