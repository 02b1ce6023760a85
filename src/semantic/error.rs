//! Error types for function resolution.

use std::fmt;

use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors returned when a function reference cannot be resolved.
///
/// Messages carry the offending name as written in the query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Empty name, leading subscript, or a qualifier that is not
    /// `[prefix.]name`.
    #[error("invalid function name: {0}")]
    InvalidName(String),

    /// A field or array selector follows the function name.
    #[error("unsupported function name: {0}")]
    UnsupportedName(String),

    /// No registered function matches.
    #[error("unknown function: {0}()")]
    UnknownFunction(String),

    /// The grammar referred to a builtin that was never registered.
    #[error("function {0}() not defined")]
    UndefinedBuiltin(String),
}

impl ResolveError {
    /// Create an invalid name error.
    pub fn invalid_name(name: impl fmt::Display) -> Self {
        Self::InvalidName(name.to_string())
    }

    /// Create an unsupported name error.
    pub fn unsupported_name(name: impl fmt::Display) -> Self {
        Self::UnsupportedName(name.to_string())
    }

    /// Create an unknown function error.
    pub fn unknown_function(name: impl fmt::Display) -> Self {
        Self::UnknownFunction(name.to_string())
    }

    /// SQLSTATE code reported to the client.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "42602",
            Self::UnsupportedName(_) => "0A000",
            Self::UnknownFunction(_) => "42883",
            Self::UndefinedBuiltin(_) => "XX000",
        }
    }
}

/// Errors raised while populating a registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("function name must not be empty")]
    Empty,

    #[error("function name is not lowercase: {0}")]
    NotNormalized(String),

    #[error("function already registered: {0}")]
    Duplicate(String),

    #[error("alias {alias} refers to unknown function {target}")]
    UnknownTarget { alias: String, target: String },
}

/// Errors from parsing the `search_path` session setting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchPathError {
    #[error("empty entry at position {0} in search_path")]
    EmptyEntry(usize),

    #[error("unterminated quoted identifier in search_path: {0}")]
    UnterminatedQuote(String),

    #[error("malformed search_path: {0}")]
    Malformed(String),
}
