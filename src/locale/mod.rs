//! Locale dataset access.
//!
//! This module provides:
//! - `LocaleRecord`, the parsed per-country layout data (`fmt` and friends)
//! - `LocaleSource`, the lookup seam used by the formatter
//! - In-memory, directory and bundled implementations of that seam
//! - A factory choosing the implementation from configuration

mod directory;
mod embedded;
mod factory;
mod source;
mod types;

pub use directory::DirectoryLocaleSource;
pub use embedded::EmbeddedLocaleSource;
pub use factory::create_locale_source;
pub use source::{LocaleSource, MemoryLocaleSource};
pub use types::LocaleRecord;
