//! Structural validation of table references.
//!
//! A table reference is either `table` or `database.table`. Function names
//! are required to have the same shape, so the function normalizer reuses
//! this check for everything before the first subscript.

use thiserror::Error;

use super::formatter::parts_to_string;
use super::unresolved::NamePart;
use crate::base::Name;

/// Errors from [`normalize_table_name`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableNameError {
    #[error("empty table name")]
    Empty,

    #[error("invalid table name: {0}: too many components")]
    TooManyParts(String),

    #[error("invalid table name: {0}")]
    Invalid(String),
}

/// A validated one- or two-level table reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableName {
    database_name: Name,
    table_name: Name,
}

impl TableName {
    /// The qualifier; empty when the reference had a single part.
    pub fn database_name(&self) -> &Name {
        &self.database_name
    }

    pub fn table_name(&self) -> &Name {
        &self.table_name
    }

    pub fn is_qualified(&self) -> bool {
        !self.database_name.is_empty()
    }

    pub fn into_parts(self) -> (Name, Name) {
        (self.database_name, self.table_name)
    }
}

/// Check that `parts` looks like `[database.]table` and split it.
///
/// Every part must be a non-empty plain identifier; stars, subscripts and
/// zero-length names (`""`) are rejected.
pub fn normalize_table_name(parts: &[NamePart]) -> Result<TableName, TableNameError> {
    let invalid = || TableNameError::Invalid(parts_to_string(parts));
    let identifier = |part: &NamePart| {
        part.as_name()
            .filter(|name| !name.is_empty())
            .cloned()
            .ok_or_else(invalid)
    };
    match parts {
        [] => Err(TableNameError::Empty),
        [table] => Ok(TableName {
            database_name: Name::default(),
            table_name: identifier(table)?,
        }),
        [database, table] => {
            let table_name = identifier(table)?;
            let database_name = identifier(database)?;
            Ok(TableName {
                database_name,
                table_name,
            })
        }
        _ => Err(TableNameError::TooManyParts(parts_to_string(parts))),
    }
}
