//! Formatting options

/// Options controlling how names are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Print identifiers as written, never adding double quotes.
    ///
    /// The output is meant for humans and may not parse back.
    pub bare_identifiers: bool,
}

impl FormatOptions {
    /// Options that never quote identifiers.
    pub fn bare() -> Self {
        Self {
            bare_identifiers: true,
        }
    }
}
