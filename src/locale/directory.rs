//! Filesystem-backed locale dataset (`<root>/<code>.json`)

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::source::LocaleSource;
use super::types::LocaleRecord;
use crate::error::{FormatError, FormatResult};

pub struct DirectoryLocaleSource {
    root: PathBuf,
}

impl DirectoryLocaleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record for `code`, or `None` if the code cannot name a
    /// file directly inside the root.
    fn record_path(&self, code: &str) -> Option<PathBuf> {
        if code.is_empty() || code == "." || code == ".." || code.contains(['/', '\\', '\0']) {
            return None;
        }
        Some(self.root.join(format!("{}.json", code)))
    }
}

impl LocaleSource for DirectoryLocaleSource {
    fn lookup(&self, code: &str) -> FormatResult<LocaleRecord> {
        let path = self
            .record_path(code)
            .ok_or_else(|| FormatError::LocaleNotSupported(code.to_string()))?;

        let raw = match std::fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FormatError::LocaleNotSupported(code.to_string()))
            }
            Err(e) => return Err(FormatError::parse(code, e)),
        };

        tracing::debug!(
            locale = %code,
            path = %path.display(),
            bytes = raw.len(),
            "Read locale record from disk"
        );

        LocaleRecord::from_json(code, &raw)
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lookup_reads_record() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("DE.json"), r#"{"fmt": "%O%n%N%n%A%n%Z %C"}"#).unwrap();

        let source = DirectoryLocaleSource::new(dir.path());
        let record = source.lookup("DE").unwrap();
        assert_eq!(record.format_template(), Some("%O%n%N%n%A%n%Z %C"));
    }

    #[test]
    fn test_lookup_missing_file() {
        let dir = tempdir().unwrap();
        let source = DirectoryLocaleSource::new(dir.path());
        assert!(matches!(
            source.lookup("DE"),
            Err(FormatError::LocaleNotSupported(_))
        ));
    }

    #[test]
    fn test_lookup_malformed_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("XX.json"), "fmt = broken").unwrap();

        let source = DirectoryLocaleSource::new(dir.path());
        assert!(matches!(
            source.lookup("XX"),
            Err(FormatError::LocaleParseError { .. })
        ));
    }

    #[test]
    fn test_codes_cannot_leave_root() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("secret.json"), r#"{"fmt": "%N"}"#).unwrap();

        let source = DirectoryLocaleSource::new(&nested);
        for code in ["../secret", "..", ".", "", "a/b", "a\\b"] {
            assert!(matches!(
                source.lookup(code),
                Err(FormatError::LocaleNotSupported(_))
            ));
        }
    }
}
