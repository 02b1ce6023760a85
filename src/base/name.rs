//! SQL identifiers.

use smol_str::SmolStr;

/// A single SQL identifier as written in the query.
///
/// The original spelling is kept so that rendering and error messages
/// reproduce what the user typed. Case-insensitive comparisons go through
/// [`Name::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Name(SmolStr);

impl Name {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(SmolStr::new(text))
    }

    /// The identifier exactly as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-folded form of the identifier.
    ///
    /// Uses full Unicode lowercasing, which is what general SQL identifiers
    /// (schema names, search path entries) require.
    pub fn normalize(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Self(SmolStr::from(text))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
