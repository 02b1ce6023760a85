//! Rendering of names back to SQL text.
//!
//! Every renderable node implements [`NodeFormatter`], which appends to a
//! shared buffer. `Display` implementations use the default options, so
//! `to_string()` yields text that parses back to the same name.

mod options;


use std::fmt;

pub use options::FormatOptions;

use super::unresolved::{ArraySubscript, NamePart, UnresolvedName};
use crate::base::{Name, is_bare_identifier};

/// A syntax node that can render itself as SQL text.
pub trait NodeFormatter {
    fn format(&self, buf: &mut String, options: &FormatOptions);
}

/// Render a node into a fresh string.
pub fn format_node<N: NodeFormatter + ?Sized>(node: &N, options: &FormatOptions) -> String {
    let mut buf = String::new();
    node.format(&mut buf, options);
    buf
}

/// Write `ident` as a double-quoted identifier, doubling embedded quotes.
fn push_quoted(buf: &mut String, ident: &str) {
    buf.push('"');
    for c in ident.chars() {
        if c == '"' {
            buf.push('"');
        }
        buf.push(c);
    }
    buf.push('"');
}

/// Render a sequence of parts: dot-separated, subscripts attached directly.
pub(crate) fn format_parts(parts: &[NamePart], buf: &mut String, options: &FormatOptions) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 && !part.is_array_subscript() {
            buf.push('.');
        }
        part.format(buf, options);
    }
}

pub(crate) fn parts_to_string(parts: &[NamePart]) -> String {
    let mut buf = String::new();
    format_parts(parts, &mut buf, &FormatOptions::default());
    buf
}

impl NodeFormatter for Name {
    fn format(&self, buf: &mut String, options: &FormatOptions) {
        if options.bare_identifiers || is_bare_identifier(self.as_str()) {
            buf.push_str(self.as_str());
        } else {
            push_quoted(buf, self.as_str());
        }
    }
}

impl NodeFormatter for ArraySubscript {
    fn format(&self, buf: &mut String, _options: &FormatOptions) {
        buf.push('[');
        buf.push_str(self.begin());
        if let Some(end) = self.end() {
            buf.push(':');
            buf.push_str(end);
        }
        buf.push(']');
    }
}

impl NodeFormatter for NamePart {
    fn format(&self, buf: &mut String, options: &FormatOptions) {
        match self {
            NamePart::Name(name) => name.format(buf, options),
            NamePart::ArraySubscript(subscript) => subscript.format(buf, options),
            NamePart::Star => buf.push('*'),
        }
    }
}

impl NodeFormatter for UnresolvedName {
    fn format(&self, buf: &mut String, options: &FormatOptions) {
        format_parts(self.parts(), buf, options);
    }
}

macro_rules! display_via_formatter {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&format_node(self, &FormatOptions::default()))
                }
            }
        )*
    };
}

display_via_formatter!(Name, ArraySubscript, NamePart, UnresolvedName);
