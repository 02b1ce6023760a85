//! Unresolved multi-part names.
//!
//! The parser produces an [`UnresolvedName`] for every dotted reference it
//! cannot classify on its own (`pg_catalog.now`, `f`, `t.col[1]`, `db.*`).
//! Later phases decide what the name refers to.

use smol_str::SmolStr;

use crate::base::Name;

/// An array subscript following a name, e.g. `[1]` or `[2:3]`.
///
/// The bound expressions are kept as unevaluated text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArraySubscript {
    begin: SmolStr,
    end: Option<SmolStr>,
}

impl ArraySubscript {
    /// A single-element subscript: `[begin]`.
    pub fn index(begin: impl AsRef<str>) -> Self {
        Self {
            begin: SmolStr::new(begin),
            end: None,
        }
    }

    /// A slice subscript: `[begin:end]`.
    pub fn slice(begin: impl AsRef<str>, end: impl AsRef<str>) -> Self {
        Self {
            begin: SmolStr::new(begin),
            end: Some(SmolStr::new(end)),
        }
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }
}

/// One component of an [`UnresolvedName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamePart {
    /// A plain identifier.
    Name(Name),
    /// An array subscript marker.
    ArraySubscript(ArraySubscript),
    /// The unqualified `*` selector.
    Star,
}

impl NamePart {
    /// The identifier, if this part is a plain name.
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            NamePart::Name(name) => Some(name),
            NamePart::ArraySubscript(_) | NamePart::Star => None,
        }
    }

    pub fn is_array_subscript(&self) -> bool {
        matches!(self, NamePart::ArraySubscript(_))
    }
}

impl From<Name> for NamePart {
    fn from(name: Name) -> Self {
        NamePart::Name(name)
    }
}

impl From<ArraySubscript> for NamePart {
    fn from(subscript: ArraySubscript) -> Self {
        NamePart::ArraySubscript(subscript)
    }
}

/// An ordered sequence of name parts as written in the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnresolvedName(Vec<NamePart>);

impl UnresolvedName {
    pub fn new(parts: Vec<NamePart>) -> Self {
        Self(parts)
    }

    /// Build a name made only of plain identifiers from dotted text.
    ///
    /// `"pg_catalog.now"` becomes `[pg_catalog, now]`; the empty string
    /// becomes the empty name. No quoting rules apply.
    pub fn from_dotted(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        text.split('.')
            .map(|part| NamePart::Name(Name::new(part)))
            .collect()
    }

    pub fn parts(&self) -> &[NamePart] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a part, returning the extended name.
    pub fn with_part(mut self, part: impl Into<NamePart>) -> Self {
        self.0.push(part.into());
        self
    }
}

impl FromIterator<NamePart> for UnresolvedName {
    fn from_iter<I: IntoIterator<Item = NamePart>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<NamePart>> for UnresolvedName {
    fn from(parts: Vec<NamePart>) -> Self {
        Self(parts)
    }
}
