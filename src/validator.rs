//! Translation quality validation.
//!
//! Checks that translated strings preserve the `:token` placeholders of
//! their source, and that a translated table covers the keys of the source
//! table. Intended for authoring-time checks, not the lookup path.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems (e.g. keys missing from the translated table)
    pub errors: Vec<String>,

    /// Non-critical problems (e.g. placeholder mismatches)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables and individual strings.
pub struct TranslationValidator;

// Placeholder pattern, cached for performance
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate that a translation preserves the placeholders of its source.
    ///
    /// Word order changes freely between languages, so placeholders are
    /// compared as sorted sets, not by position.
    pub fn validate(source: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut source_tokens = Self::extract_placeholders(source);
        let mut translated_tokens = Self::extract_placeholders(translated);
        source_tokens.sort_unstable();
        translated_tokens.sort_unstable();

        if source_tokens != translated_tokens {
            report.warnings.push(format!(
                "Placeholder mismatch: source has {:?}, translation has {:?}",
                source_tokens, translated_tokens
            ));
        }

        report
    }

    /// Validate a translated table against its source-locale table.
    ///
    /// Keys missing from the translated table are errors; placeholder
    /// mismatches and keys absent from the source are warnings. Keys are
    /// visited in sorted order so reports are deterministic.
    pub fn validate_table(
        source: &HashMap<String, String>,
        translated: &HashMap<String, String>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut source_keys: Vec<&String> = source.keys().collect();
        source_keys.sort_unstable();

        for key in source_keys {
            match translated.get(key) {
                None => report
                    .errors
                    .push(format!("Missing key in translation: '{}'", key)),
                Some(value) => {
                    let inner = Self::validate(&source[key], value);
                    for warning in inner.warnings {
                        report.warnings.push(format!("'{}': {}", key, warning));
                    }
                }
            }
        }

        let mut extra_keys: Vec<&String> = translated
            .keys()
            .filter(|key| !source.contains_key(*key))
            .collect();
        extra_keys.sort_unstable();
        for key in extra_keys {
            report
                .warnings
                .push(format!("Key not present in source: '{}'", key));
        }

        report
    }

    /// Extract all `:token` placeholders from text
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r":([a-zA-Z0-9_]+)").expect("valid regex"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_single_placeholder() {
        let tokens = TranslationValidator::extract_placeholders("Hi :user");
        assert_eq!(tokens, vec![":user"]);
    }

    #[test]
    fn test_extract_multiple_placeholders() {
        let tokens =
            TranslationValidator::extract_placeholders("Hello :name, see you :when");
        assert_eq!(tokens, vec![":name", ":when"]);
    }

    #[test]
    fn test_extract_none() {
        let tokens = TranslationValidator::extract_placeholders("No placeholders here");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_extract_with_underscores() {
        let tokens = TranslationValidator::extract_placeholders("Value: :max_count");
        assert_eq!(tokens, vec![":max_count"]);
    }

    // ==================== String Validation Tests ====================

    #[test]
    fn test_validate_preserved_placeholders() {
        let report =
            TranslationValidator::validate("Hi :user, you have :count", "Tienes :count, hola :user");
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_dropped_placeholder() {
        let report = TranslationValidator::validate("Hi :user", "Hola usuario");
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_validate_extra_placeholder() {
        let report = TranslationValidator::validate("Hello", "Hola :user");
        assert!(report.has_warnings());
    }

    // ==================== Table Validation Tests ====================

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_table_clean() {
        let source = table(&[("hello", "Hi :user"), ("bye", "Goodbye")]);
        let translated = table(&[("hello", "Hola :user"), ("bye", "Adiós")]);

        let report = TranslationValidator::validate_table(&source, &translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_table_missing_key_is_error() {
        let source = table(&[("hello", "Hi"), ("bye", "Goodbye")]);
        let translated = table(&[("hello", "Hola")]);

        let report = TranslationValidator::validate_table(&source, &translated);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("'bye'"));
    }

    #[test]
    fn test_validate_table_placeholder_mismatch_is_warning() {
        let source = table(&[("hello", "Hi :user")]);
        let translated = table(&[("hello", "Hola")]);

        let report = TranslationValidator::validate_table(&source, &translated);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("'hello'"));
    }

    #[test]
    fn test_validate_table_extra_key_is_warning() {
        let source = table(&[("hello", "Hi")]);
        let translated = table(&[("hello", "Hola"), ("stale", "Viejo")]);

        let report = TranslationValidator::validate_table(&source, &translated);
        assert!(!report.has_errors());
        assert!(report.warnings.iter().any(|w| w.contains("'stale'")));
    }

    #[test]
    fn test_validate_table_deterministic_order() {
        let source = table(&[("b", "B"), ("a", "A"), ("c", "C")]);
        let translated = table(&[]);

        let report = TranslationValidator::validate_table(&source, &translated);
        assert_eq!(report.errors.len(), 3);
        assert!(report.errors[0].contains("'a'"));
        assert!(report.errors[1].contains("'b'"));
        assert!(report.errors[2].contains("'c'"));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());
        assert!(report.has_errors());
        assert!(!report.is_clean());
    }
}
