//! Locale record types

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// Layout data for one locale, as found in the dataset.
///
/// Only `fmt` is interpreted. The remaining libaddressinput keys (`name`,
/// `lfmt`, `require`, `upper`, `zip`, `zipex`, `posturl`, ...) are kept
/// untouched for callers that want them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleRecord {
    #[serde(flatten)]
    data: serde_json::Map<String, serde_json::Value>,
}

impl LocaleRecord {
    /// Parse a raw dataset entry.
    ///
    /// Objects are kept as-is. A JSON list is accepted as a record keyed by
    /// element index, so it loads but has no usable `fmt`. Scalars, null and
    /// invalid JSON are parse errors.
    pub fn from_json(locale: &str, raw: &[u8]) -> FormatResult<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(raw).map_err(|e| FormatError::parse(locale, e))?;

        match value {
            serde_json::Value::Object(data) => Ok(Self { data }),
            serde_json::Value::Array(items) => Ok(Self {
                data: items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item))
                    .collect(),
            }),
            other => Err(FormatError::parse(
                locale,
                format!("expected an object or list, found {}", json_kind(&other)),
            )),
        }
    }

    /// Format template with `%<token>` placeholders, if the record has one
    pub fn format_template(&self) -> Option<&str> {
        self.data.get("fmt").and_then(|v| v.as_str())
    }

    /// Display name of the country, if present
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(|v| v.as_str())
    }

    /// Raw value of any key in the record
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn data(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.data
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for LocaleRecord {
    fn from(data: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
