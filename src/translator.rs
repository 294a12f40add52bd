//! The translator: locale-chain loading, caching, and the lookup API.
//!
//! Lookups never fail. A missing translation resolves to the key itself,
//! an unknown locale simply finds no files and degrades to the fallback
//! locale, and broken files are skipped during loading.

use std::collections::HashMap;
use std::path::{PathBuf, MAIN_SEPARATOR_STR};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::debug;

use crate::config::Config;
use crate::discovery::find_language_files;
use crate::key::parse_key;
use crate::loader::load_messages;
use crate::locale::{locale_chain, normalize};
use crate::metrics::TranslationMetrics;
use crate::substitute::substitute;

/// A merged translation table for one effective locale.
type Table = Arc<HashMap<String, String>>;

/// Resolves message keys to locale-specific strings.
///
/// Owns its [`Config`] and a per-process cache of merged translation tables,
/// keyed by effective locale. Cache entries live for the lifetime of the
/// translator and are never invalidated or evicted.
pub struct Translator {
    config: Config,
    cache: Mutex<HashMap<String, Table>>,
}

impl Translator {
    /// Create a translator from an explicit configuration.
    ///
    /// The configured locales are normalized on the way in.
    pub fn new(mut config: Config) -> Self {
        config.locale = normalize(&config.locale);
        config.source_locale = normalize(&config.source_locale);
        config.fallback_locale = normalize(&config.fallback_locale);
        Self {
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Create a translator with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Configuration ====================
    //
    // Setters do not invalidate the cache: tables already resolved keep the
    // configuration they were loaded under.

    /// The current target locale.
    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    /// Change the target locale (normalized).
    pub fn set_locale(&mut self, locale: &str) -> &mut Self {
        self.config.locale = normalize(locale);
        self
    }

    /// The current fallback locale.
    pub fn fallback(&self) -> &str {
        &self.config.fallback_locale
    }

    /// Change the fallback locale (normalized).
    pub fn set_fallback(&mut self, fallback: &str) -> &mut Self {
        self.config.fallback_locale = normalize(fallback);
        self
    }

    /// Change the root directory of language files.
    pub fn set_root_directory(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.config.root_dir = dir.into();
        self
    }

    /// Change the language subdirectory name.
    pub fn set_lang_dir(&mut self, dir: impl Into<String>) -> &mut Self {
        self.config.lang_dir = dir.into();
        self
    }

    /// Change the translation file extension (including the dot).
    pub fn set_file_extension(&mut self, ext: impl Into<String>) -> &mut Self {
        self.config.file_ext = ext.into();
        self
    }

    /// Register an extra search directory. Directories registered later take
    /// precedence when several provide the same file.
    pub fn add_search_path(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.config.search_paths.push(dir.into());
        self
    }

    // ==================== Lookup ====================

    /// Resolve a key to its translation.
    ///
    /// Uses `locale` when given, otherwise the configured target locale.
    /// Returns the original key unchanged when no translation exists; this
    /// is the sole "not found" signal.
    pub fn get(&self, key: &str, locale: Option<&str>) -> String {
        let locale = normalize(locale.unwrap_or(&self.config.locale));
        let parsed = parse_key(key);
        let table = self.load(&locale, parsed.namespace);
        table
            .get(parsed.key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Whether a translation exists for the key.
    ///
    /// Defined as "`get` returns something different from the input key", so
    /// a translation that maps a key to itself is indistinguishable from a
    /// missing one. Known limitation, kept for compatibility.
    pub fn has(&self, key: &str, locale: Option<&str>) -> bool {
        self.get(key, locale) != key
    }

    /// Resolve a key and substitute placeholder values into the result.
    pub fn translate(
        &self,
        key: &str,
        replacements: &[(&str, &str)],
        locale: Option<&str>,
    ) -> String {
        let text = self.get(key, locale);
        if replacements.is_empty() {
            text
        } else {
            substitute(&text, replacements)
        }
    }

    // ==================== Loading ====================

    /// Return the merged translation table for a locale and optional
    /// namespace, loading and caching it on first use.
    ///
    /// The locale parts degrade one level at a time; the namespace, when
    /// present, is carried as a fixed path suffix through every level, so
    /// locale "es-es" with namespace "common" visits `es/es/common` then
    /// `es/common`. All matching levels contribute entries, earlier (more
    /// specific) levels winning per key.
    fn load(&self, locale: &str, namespace: Option<&str>) -> Table {
        let effective = match namespace {
            Some(ns) => format!("{locale}-{ns}"),
            None => locale.to_string(),
        };

        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(table) = cache.get(&effective) {
                TranslationMetrics::global().record_cache_hit();
                return Arc::clone(table);
            }
        }
        TranslationMetrics::global().record_cache_miss();

        // The lock is released during file I/O: two concurrent misses may
        // both load, but the merge is deterministic, so overwriting the
        // same entry is safe.
        let mut table = HashMap::new();
        for step in locale_chain(locale) {
            let locale_path = step.replace('-', MAIN_SEPARATOR_STR);
            let relative = match namespace {
                Some(ns) => format!("{locale_path}{MAIN_SEPARATOR_STR}{ns}"),
                None => locale_path.clone(),
            };

            let files = find_language_files(&self.config, &relative, &locale_path);
            if !files.is_empty() {
                load_messages(&files, &mut table);
            }
        }
        debug!(locale = %effective, entries = table.len(), "resolved translation table");

        let table = Arc::new(table);
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(effective, Arc::clone(&table));
        table
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Process-wide default translator (initialized lazily)
static GLOBAL: OnceLock<Translator> = OnceLock::new();

/// The process-wide default translator.
///
/// Configured from the environment on first use (see [`Config::from_env`]);
/// falls back to the default configuration when `LINGO_ROOT_DIR` is unset.
pub fn global() -> &'static Translator {
    GLOBAL.get_or_init(|| Translator::new(Config::from_env().unwrap_or_default()))
}

/// Resolve a key against the process-wide default translator and substitute
/// placeholder values into the result.
///
/// # Example
/// ```rust,ignore
/// let hello = lingo::translate("Hello, :user", &[(":user", "Sam")], None);
/// ```
pub fn translate(key: &str, replacements: &[(&str, &str)], locale: Option<&str>) -> String {
    global().translate(key, replacements, locale)
}
