//! Syntax: the unresolved names handed over by the parser, the structural
//! table-name check, and rendering back to SQL text.

pub mod formatter;
mod table_name;
mod unresolved;

pub use formatter::{FormatOptions, NodeFormatter, format_node};
pub use table_name::{TableName, TableNameError, normalize_table_name};
pub use unresolved::{ArraySubscript, NamePart, UnresolvedName};
