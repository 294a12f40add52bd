//! Lookup-key parsing.
//!
//! A key containing a `"."` addresses a namespaced table: the portion before
//! the first dot names a sub-table (one translation file per top-level
//! namespace), and the remainder is the lookup key within that sub-table.
//! Any other key is looked up directly in the flat table for the locale.

/// A lookup key split into its addressing parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey<'a> {
    /// Sub-table name (the portion before the first `"."`), when present.
    pub namespace: Option<&'a str>,
    /// The key looked up inside the table. May itself contain dots.
    pub key: &'a str,
}

/// Parse a lookup key into namespace and in-table key.
///
/// Splits at the FIRST dot only: `"welcome.hello.there"` yields namespace
/// `"welcome"` and key `"hello.there"`. A key beginning with a dot has an
/// empty namespace portion and is treated as a flat key instead.
pub fn parse_key(key: &str) -> ParsedKey<'_> {
    match key.find('.') {
        Some(pos) if pos > 0 => ParsedKey {
            namespace: Some(&key[..pos]),
            key: &key[pos + 1..],
        },
        _ => ParsedKey {
            namespace: None,
            key,
        },
    }
}
