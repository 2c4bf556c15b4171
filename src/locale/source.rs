//! Locale dataset abstraction and the in-memory implementation

use dashmap::DashMap;

use super::types::LocaleRecord;
use crate::error::{FormatError, FormatResult};

/// Read-only access to a keyed dataset of locale records.
///
/// Implementations return [`FormatError::LocaleNotSupported`] when no entry
/// exists for `code` and [`FormatError::LocaleParseError`] when the entry
/// cannot be turned into a structured mapping.
pub trait LocaleSource: Send + Sync {
    fn lookup(&self, code: &str) -> FormatResult<LocaleRecord>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// In-memory dataset holding raw, unparsed entries
pub struct MemoryLocaleSource {
    entries: DashMap<String, String>,
}

impl Default for MemoryLocaleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLocaleSource {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Add or replace the raw JSON entry for `code`
    pub fn insert(&self, code: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(code.into(), raw.into());
    }

    /// Add a record whose only key is `fmt`
    pub fn insert_format(&self, code: impl Into<String>, fmt: &str) {
        self.insert(code, serde_json::json!({ "fmt": fmt }).to_string());
    }

    pub fn remove(&self, code: &str) -> bool {
        self.entries.remove(code).is_some()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes with an entry, sorted
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        codes.sort();
        codes
    }
}

impl LocaleSource for MemoryLocaleSource {
    fn lookup(&self, code: &str) -> FormatResult<LocaleRecord> {
        let raw = self
            .entries
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| FormatError::LocaleNotSupported(code.to_string()))?;

        LocaleRecord::from_json(code, raw.as_bytes())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
