//! Locale records bundled into the binary from `i18n/`

use rust_embed::RustEmbed;

use super::source::LocaleSource;
use super::types::LocaleRecord;
use crate::error::{FormatError, FormatResult};

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Asset;

/// Dataset compiled into the crate. Default source of a new formatter.
///
/// The bundled set is partial: it covers a handful of countries (see
/// [`EmbeddedLocaleSource::codes`]), so codes such as `SE` or `MX` fail with
/// `LocaleNotSupported`. Point a [`DirectoryLocaleSource`] at a full
/// libaddressinput export for complete coverage.
///
/// [`DirectoryLocaleSource`]: super::DirectoryLocaleSource
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLocaleSource;

impl EmbeddedLocaleSource {
    pub fn new() -> Self {
        Self
    }

    /// Codes of every bundled record, sorted
    pub fn codes() -> Vec<String> {
        let mut codes: Vec<String> = Asset::iter()
            .filter_map(|file| file.strip_suffix(".json").map(str::to_string))
            .collect();
        codes.sort();
        codes
    }
}

impl LocaleSource for EmbeddedLocaleSource {
    fn lookup(&self, code: &str) -> FormatResult<LocaleRecord> {
        if code.contains('/') {
            return Err(FormatError::LocaleNotSupported(code.to_string()));
        }

        let file = Asset::get(&format!("{}.json", code))
            .ok_or_else(|| FormatError::LocaleNotSupported(code.to_string()))?;

        LocaleRecord::from_json(code, file.data.as_ref())
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_codes() {
        let codes = EmbeddedLocaleSource::codes();
        for code in ["US", "GB", "DE", "FR", "JP"] {
            assert!(codes.iter().any(|c| c == code), "missing {}", code);
        }
    }

    #[test]
    fn test_every_bundled_record_has_fmt() {
        let source = EmbeddedLocaleSource::new();
        for code in EmbeddedLocaleSource::codes() {
            let record = source.lookup(&code).unwrap();
            assert!(record.format_template().is_some(), "{} has no fmt", code);
            assert_eq!(record.get("key").and_then(|v| v.as_str()), Some(code.as_str()));
        }
    }

    #[test]
    fn test_bundled_set_is_partial() {
        let source = EmbeddedLocaleSource::new();
        for code in ["SE", "MX"] {
            assert!(matches!(
                source.lookup(code),
                Err(FormatError::LocaleNotSupported(c)) if c == code
            ));
        }
    }

    #[test]
    fn test_unknown_code() {
        let source = EmbeddedLocaleSource::new();
        assert!(matches!(
            source.lookup("QQ"),
            Err(FormatError::LocaleNotSupported(_))
        ));
        assert!(matches!(
            source.lookup("us"),
            Err(FormatError::LocaleNotSupported(_))
        ));
    }
}
