//! Placeholder substitution for resolved strings.
//!
//! Translations carry placeholder tokens like `:user`; callers supply the
//! replacement values at lookup time. This is plain textual substitution,
//! not a templating language.

/// Replace placeholder tokens in a resolved string.
///
/// Replacement is simultaneous and longest-match-first: every position in
/// the text is matched against all tokens, the longest matching token wins,
/// and replacement values are never re-scanned, so a value that happens to
/// contain another token is not expanded.
///
/// # Example
/// ```
/// let out = lingo::substitute("Hi :user", &[(":user", "Sam")]);
/// assert_eq!(out, "Hi Sam");
/// ```
pub fn substitute(text: &str, replacements: &[(&str, &str)]) -> String {
    if replacements.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let matched = replacements
            .iter()
            .filter(|(token, _)| !token.is_empty() && rest.starts_with(token))
            .max_by_key(|(token, _)| token.len());

        match matched {
            Some(&(token, value)) => {
                result.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                result.push(first);
                rest = &rest[first.len_utf8()..];
            }
        }
    }

    result
}
