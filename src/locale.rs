//! Locale tag normalization and degradation chains.
//!
//! A locale tag is a string of hyphen-separated parts (language, region,
//! variant, ...). Tags compare case-insensitively; [`normalize`] produces the
//! canonical form and is idempotent, so it is safe to apply at every entry
//! point into the resolver.

/// Normalize a user-supplied locale string.
///
/// Lower-cases the tag and replaces spaces and underscores with hyphens.
/// Total: empty or malformed input simply normalizes to itself; validation
/// is deliberately absent because an unknown locale just finds no files and
/// degrades to fallback behavior downstream.
///
/// # Example
/// ```
/// assert_eq!(lingo::locale::normalize("EN_us"), "en-us");
/// assert_eq!(lingo::locale::normalize("zh CN"), "zh-cn");
/// ```
pub fn normalize(locale: &str) -> String {
    locale.to_lowercase().replace([' ', '_'], "-")
}

/// Generate the degradation chain for a normalized locale.
///
/// The chain is most-specific-first, dropping one trailing part per step:
/// `"zh-cn-var"` → `["zh-cn-var", "zh-cn", "zh"]`. Every level of the chain
/// contributes entries during loading, with earlier (more specific) levels
/// taking precedence.
pub fn locale_chain(locale: &str) -> Vec<String> {
    let mut parts: Vec<&str> = locale.split('-').collect();
    let mut chain = Vec::with_capacity(parts.len());
    while !parts.is_empty() {
        chain.push(parts.join("-"));
        parts.pop();
    }
    chain
}
