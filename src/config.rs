//! Translator configuration.
//!
//! All configuration is carried by an explicit [`Config`] value owned by a
//! `Translator` instance; there is no hidden process-wide mutable state.
//! Construct one translator per tenant or request context when concurrent
//! differing configurations are needed.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for a `Translator`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory under which translation files live.
    pub root_dir: PathBuf,

    /// Name of the language subdirectory inside the root directory.
    pub lang_dir: String,

    /// Translation file extension, including the dot (default ".json").
    pub file_ext: String,

    /// Target locale used when a lookup does not pass one (default "en-us").
    pub locale: String,

    /// Locale the translation sources are authored in (default "en-us").
    pub source_locale: String,

    /// Locale substituted into a file path when the primary locale's file
    /// is missing (default "en").
    pub fallback_locale: String,

    /// Extra search directories, consulted in addition to
    /// `root_dir/lang_dir`. Directories registered later take precedence
    /// when several provide the same file.
    pub search_paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            lang_dir: "lang".to_string(),
            file_ext: ".json".to_string(),
            locale: "en-us".to_string(),
            source_locale: "en-us".to_string(),
            fallback_locale: "en".to_string(),
            search_paths: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `LINGO_ROOT_DIR` is required; everything else falls back to the
    /// defaults documented on the fields: `LINGO_LANG_DIR`, `LINGO_FILE_EXT`,
    /// `LINGO_LOCALE`, `LINGO_SOURCE_LOCALE`, `LINGO_FALLBACK_LOCALE`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            root_dir: PathBuf::from(
                std::env::var("LINGO_ROOT_DIR").context("LINGO_ROOT_DIR not set")?,
            ),
            lang_dir: std::env::var("LINGO_LANG_DIR").unwrap_or_else(|_| "lang".to_string()),
            file_ext: std::env::var("LINGO_FILE_EXT").unwrap_or_else(|_| ".json".to_string()),
            locale: std::env::var("LINGO_LOCALE").unwrap_or_else(|_| "en-us".to_string()),
            source_locale: std::env::var("LINGO_SOURCE_LOCALE")
                .unwrap_or_else(|_| "en-us".to_string()),
            fallback_locale: std::env::var("LINGO_FALLBACK_LOCALE")
                .unwrap_or_else(|_| "en".to_string()),
            search_paths: Vec::new(),
        })
    }

    /// All search directories in registration order: the language directory
    /// under the root first, then every extra search path.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.root_dir.join(&self.lang_dir)];
        dirs.extend(self.search_paths.iter().cloned());
        dirs
    }
}
