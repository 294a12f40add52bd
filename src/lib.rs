//! File-based message translation with locale fallback chains.
//!
//! `lingo` resolves human-readable message keys to locale-specific strings.
//! Translation tables are JSON files laid out hierarchically under one or
//! more search directories; a requested locale such as `"zh-cn"` is
//! progressively degraded (`"zh-cn"` → `"zh"`), every matching level
//! contributes entries, and a configured fallback locale is substituted when
//! the primary file is absent. Resolved tables are cached for the lifetime
//! of the process.
//!
//! # Architecture
//!
//! - `locale`: locale tag normalization and degradation chains
//! - `key`: namespaced lookup-key parsing (`"welcome.hello"`)
//! - `discovery`: candidate file discovery across search directories
//! - `loader`: reading translation files and merge semantics
//! - `translator`: the resolver, its cache, and the public lookup API
//! - `substitute`: placeholder substitution (`:user` → `"Sam"`)
//! - `config`: explicit configuration surface
//! - `metrics`: resolution observability
//! - `validator`: translation quality validation
//!
//! # Example
//!
//! ```rust,ignore
//! use lingo::{Config, Translator};
//!
//! let mut config = Config::default();
//! config.root_dir = "resources".into();
//! let translator = Translator::new(config);
//!
//! // Flat key, configured locale
//! let hello = translator.get("hello", None);
//!
//! // Namespaced key with placeholder substitution
//! let greeting = translator.translate("welcome.hello", &[(":user", "Sam")], Some("en-us"));
//! ```
//!
//! Lookups never fail: a missing translation resolves to the key itself,
//! which makes untranslated strings easy to spot in output.

pub mod config;
pub mod discovery;
pub mod key;
pub mod loader;
pub mod locale;
pub mod metrics;
pub mod substitute;
pub mod translator;
pub mod validator;

pub use config::Config;
pub use loader::LoadError;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use substitute::substitute;
pub use translator::{global, translate, Translator};
pub use validator::{TranslationValidator, ValidationReport};
