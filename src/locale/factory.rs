//! Locale source factory

use std::sync::Arc;

use crate::config::LocaleConfig;

use super::directory::DirectoryLocaleSource;
use super::embedded::EmbeddedLocaleSource;
use super::source::{LocaleSource, MemoryLocaleSource};

/// Create a locale source based on configuration.
///
/// Returns the implementation named by the `source` setting:
/// - `"directory"`: Returns a `DirectoryLocaleSource` rooted at `directory`
/// - `"memory"`: Returns an empty `MemoryLocaleSource`
/// - `"embedded"` (default): Returns the bundled `EmbeddedLocaleSource`
///
/// Unknown values fall back to the embedded dataset.
///
/// # Example
///
/// ```rust,ignore
/// let source = create_locale_source(&settings.locale);
/// let formatter = AddressFormatter::with_source(source);
/// ```
pub fn create_locale_source(settings: &LocaleConfig) -> Arc<dyn LocaleSource> {
    match settings.source.as_str() {
        "directory" => {
            tracing::info!(
                source = "directory",
                directory = %settings.directory,
                "Creating directory locale source"
            );
            Arc::new(DirectoryLocaleSource::new(&settings.directory))
        }
        "memory" => {
            tracing::info!(source = "memory", "Creating in-memory locale source");
            Arc::new(MemoryLocaleSource::new())
        }
        "embedded" => {
            tracing::info!(source = "embedded", "Creating embedded locale source");
            Arc::new(EmbeddedLocaleSource::new())
        }
        other => {
            tracing::warn!(
                source = %other,
                "Unknown locale source, falling back to embedded"
            );
            Arc::new(EmbeddedLocaleSource::new())
        }
    }
}
