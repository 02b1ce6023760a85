//! Identifier classification.
//!
//! Decides whether an identifier can be printed without double quotes and
//! still read back as the same identifier.

/// Keywords that always need quoting when used as identifiers.
///
/// Kept sorted for binary search.
const RESERVED_KEYWORDS: &[&str] = &[
    "all",
    "analyse",
    "analyze",
    "and",
    "any",
    "array",
    "as",
    "asc",
    "asymmetric",
    "both",
    "case",
    "cast",
    "check",
    "collate",
    "column",
    "constraint",
    "create",
    "default",
    "deferrable",
    "desc",
    "distinct",
    "do",
    "else",
    "end",
    "except",
    "false",
    "fetch",
    "for",
    "foreign",
    "from",
    "grant",
    "group",
    "having",
    "in",
    "initially",
    "intersect",
    "into",
    "lateral",
    "leading",
    "limit",
    "not",
    "null",
    "offset",
    "on",
    "only",
    "or",
    "order",
    "placing",
    "primary",
    "references",
    "returning",
    "select",
    "some",
    "symmetric",
    "table",
    "then",
    "to",
    "trailing",
    "true",
    "union",
    "unique",
    "using",
    "variadic",
    "when",
    "where",
    "window",
    "with",
];

/// Returns true if `ident` is a reserved keyword (compared case-insensitively).
pub fn is_reserved_keyword(ident: &str) -> bool {
    RESERVED_KEYWORDS
        .binary_search(&ident.to_lowercase().as_str())
        .is_ok()
}

/// Returns true if `ident` can be rendered without quotes.
///
/// That holds when it is a syntactically valid identifier (UAX #31 start and
/// continue characters, plus `_` and `$`), is unchanged by case folding, and
/// is not a reserved keyword.
pub fn is_bare_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || unicode_ident::is_xid_start(first)) {
        return false;
    }
    if !chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c)) {
        return false;
    }
    ident.to_lowercase() == ident && !is_reserved_keyword(ident)
}
