use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Locale not supported: {0}")]
    LocaleNotSupported(String),

    #[error("Locale \"{locale}\" could not be parsed: {reason}")]
    LocaleParseError { locale: String, reason: String },

    #[error("Attribute not supported: {0}")]
    AttributeInvalid(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FormatError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::LocaleNotSupported(_) => "LOCALE_NOT_SUPPORTED",
            FormatError::LocaleParseError { .. } => "LOCALE_PARSE_ERROR",
            FormatError::AttributeInvalid(_) => "ATTRIBUTE_INVALID",
            FormatError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub(crate) fn parse(locale: &str, reason: impl ToString) -> Self {
        FormatError::LocaleParseError {
            locale: locale.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type FormatResult<T> = std::result::Result<T, FormatError>;
