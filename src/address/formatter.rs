//! Locale-aware address formatter

use std::sync::Arc;

use crate::config::Settings;
use crate::error::{FormatError, FormatResult};
use crate::locale::{create_locale_source, EmbeddedLocaleSource, LocaleRecord, LocaleSource};

use super::attributes::AttributeStore;
use super::field::Field;
use super::render::{render_template, LineBreak};

/// Locale loaded by a successful `set_locale`
#[derive(Debug, Clone)]
struct ActiveLocale {
    code: String,
    record: LocaleRecord,
}

/// Formats a street address according to the layout of the active locale
pub struct AddressFormatter {
    source: Arc<dyn LocaleSource>,
    locale: Option<ActiveLocale>,
    attributes: AttributeStore,
    default_line_break: LineBreak,
}

impl Default for AddressFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressFormatter {
    /// Create a formatter backed by the bundled locale dataset.
    ///
    /// The bundled dataset only covers a subset of countries; use
    /// [`AddressFormatter::with_source`] with a `DirectoryLocaleSource` for
    /// the full set.
    pub fn new() -> Self {
        Self::with_source(Arc::new(EmbeddedLocaleSource::new()))
    }

    /// Create a formatter backed by a custom locale source
    pub fn with_source(source: Arc<dyn LocaleSource>) -> Self {
        Self {
            source,
            locale: None,
            attributes: AttributeStore::new(),
            default_line_break: LineBreak::Plain,
        }
    }

    /// Create a formatter from settings, applying the configured default
    /// locale if there is one
    pub fn from_settings(settings: &Settings) -> FormatResult<Self> {
        let mut formatter = Self::with_source(create_locale_source(&settings.locale));
        formatter.default_line_break = LineBreak::from(settings.render.html);

        if let Some(code) = &settings.locale.default {
            formatter.set_locale(code)?;
        }

        Ok(formatter)
    }

    /// Load settings from files and environment, then build a formatter
    pub fn from_env() -> FormatResult<Self> {
        let settings = Settings::new()?;
        Self::from_settings(&settings)
    }

    /// Switch to the layout of `code`.
    ///
    /// The previous locale stays active if the lookup fails.
    pub fn set_locale(&mut self, code: &str) -> FormatResult<()> {
        let record = self.source.lookup(code)?;

        tracing::debug!(
            locale = %code,
            source = self.source.name(),
            has_fmt = record.format_template().is_some(),
            "Locale loaded"
        );

        self.locale = Some(ActiveLocale {
            code: code.to_string(),
            record,
        });
        Ok(())
    }

    /// Code of the active locale
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_ref().map(|l| l.code.as_str())
    }

    /// Record of the active locale
    pub fn locale_record(&self) -> Option<&LocaleRecord> {
        self.locale.as_ref().map(|l| &l.record)
    }

    /// Set an attribute by its canonical name (`"POSTAL_CODE"`, ...)
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> FormatResult<&str> {
        let field: Field = name.parse()?;
        Ok(self.attributes.set(field, value))
    }

    /// Get an attribute by its canonical name
    pub fn attribute(&self, name: &str) -> FormatResult<&str> {
        let field: Field = name.parse()?;
        Ok(self.attributes.get(field))
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &str {
        self.attributes.set(field, value)
    }

    pub fn get(&self, field: Field) -> &str {
        self.attributes.get(field)
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Reset every attribute to the empty string. The locale is kept.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Render the address with the active locale's template.
    ///
    /// With `html` set, line breaks become `"\n<br>"`. Attribute values are
    /// inserted without HTML escaping.
    pub fn format_address(&self, html: bool) -> FormatResult<String> {
        self.render(LineBreak::from(html))
    }

    pub fn format_address_html(&self) -> FormatResult<String> {
        self.render(LineBreak::Html)
    }

    /// Render using the line-break mode from settings (plain by default)
    pub fn format_default(&self) -> FormatResult<String> {
        self.render(self.default_line_break)
    }

    fn render(&self, line_break: LineBreak) -> FormatResult<String> {
        let active = self
            .locale
            .as_ref()
            .ok_or_else(|| FormatError::LocaleNotSupported("no locale set".to_string()))?;

        let template = active
            .record
            .format_template()
            .ok_or_else(|| FormatError::LocaleNotSupported(active.code.clone()))?;

        Ok(render_template(template, &self.attributes, line_break))
    }
}
