//! Namespace search order for unqualified function names.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::base::Name;
use crate::semantic::error::SearchPathError;

/// Ordered list of namespaces tried, first to last, when resolving an
/// unqualified function name.
///
/// Entries are already normalized. The path is flat: entries are never
/// expanded or merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SearchPath(Vec<String>);

impl SearchPath {
    /// Build a path from entries that are already normalized.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(Into::into).collect())
    }

    /// Build a path from identifiers, normalizing each one.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a Name>) -> Self {
        Self(names.into_iter().map(Name::normalize).collect())
    }

    /// Parse the textual value of the `search_path` session setting.
    ///
    /// Entries are separated by commas. Bare entries are case-folded;
    /// double-quoted entries keep their case, with `""` standing for a
    /// literal quote. A blank setting is the empty path.
    pub fn parse(setting: &str) -> Result<Self, SearchPathError> {
        if setting.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut entries = Vec::new();
        let mut chars = setting.chars().peekable();
        loop {
            skip_whitespace(&mut chars);
            let position = entries.len();
            let entry = if chars.next_if_eq(&'"').is_some() {
                parse_quoted(&mut chars, setting)?
            } else {
                let mut bare = String::new();
                while let Some(c) = chars.next_if(|&c| c != ',') {
                    bare.push(c);
                }
                bare.trim_end().to_lowercase()
            };
            if entry.is_empty() {
                return Err(SearchPathError::EmptyEntry(position));
            }
            entries.push(entry);

            skip_whitespace(&mut chars);
            match chars.next() {
                None => break,
                Some(',') => {}
                Some(_) => return Err(SearchPathError::Malformed(setting.to_string())),
            }
        }
        Ok(Self(entries))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

/// Read a quoted identifier whose opening quote was already consumed.
fn parse_quoted(chars: &mut Peekable<Chars<'_>>, setting: &str) -> Result<String, SearchPathError> {
    let mut ident = String::new();
    loop {
        match chars.next() {
            None => return Err(SearchPathError::UnterminatedQuote(setting.to_string())),
            Some('"') => {
                if chars.next_if_eq(&'"').is_some() {
                    ident.push('"');
                } else {
                    return Ok(ident);
                }
            }
            Some(c) => ident.push(c),
        }
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            // Entries that would not read back bare are double-quoted.
            fmt::Display::fmt(&Name::new(entry), f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
