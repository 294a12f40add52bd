//! Candidate translation-file discovery.
//!
//! For one degraded locale level, discovery walks every configured search
//! directory and collects the files that actually exist on disk. A missing
//! file is not an error; it simply contributes nothing.

use std::path::{PathBuf, MAIN_SEPARATOR_STR};

use tracing::debug;

use crate::config::Config;

/// Find the translation files that exist for one degraded locale level.
///
/// `relative` is the path for this level, built from the degraded locale
/// parts joined with the path separator plus the namespace segment when one
/// is in play (e.g. `"es/es/common"`). `locale_path` is the locale portion
/// alone (e.g. `"es/es"`), which is what the fallback locale is substituted
/// for.
///
/// Per directory: the exact file is included when it exists; otherwise the
/// fallback-substituted path is included when that file exists. A directory
/// contributes at most one file per call. Directories registered later
/// appear later in the result, which makes them win the batch merge for
/// overlapping keys.
///
/// Returns an empty sequence when nothing is found anywhere.
pub fn find_language_files(config: &Config, relative: &str, locale_path: &str) -> Vec<PathBuf> {
    let fallback_relative = fallback_relative(config, relative, locale_path);
    let mut files = Vec::new();

    for dir in config.search_dirs() {
        let primary = dir.join(format!("{}{}", relative, config.file_ext));
        if primary.is_file() {
            debug!(path = %primary.display(), "found translation file");
            files.push(primary);
            continue;
        }

        if let Some(fb) = &fallback_relative {
            let candidate = dir.join(format!("{}{}", fb, config.file_ext));
            if candidate.is_file() {
                debug!(path = %candidate.display(), "found fallback translation file");
                files.push(candidate);
            }
        }
    }

    files
}

/// Substitute the fallback locale for the active locale within the relative
/// path, keeping any namespace suffix: `"es/es/common"` with fallback `"en"`
/// becomes `"en/common"`. `None` when the fallback equals the active locale.
fn fallback_relative(config: &Config, relative: &str, locale_path: &str) -> Option<String> {
    let fallback_path = crate::locale::normalize(&config.fallback_locale)
        .split('-')
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR);

    if fallback_path == locale_path {
        return None;
    }
    Some(relative.replacen(locale_path, &fallback_path, 1))
}
