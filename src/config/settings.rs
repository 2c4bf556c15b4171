use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Dataset backend: "embedded", "directory" or "memory"
    #[serde(default = "default_source")]
    pub source: String,
    /// Root directory holding `<code>.json` records (directory backend)
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Locale applied when a formatter is built from settings
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Render `%n` as `\n<br>` instead of a bare newline
    #[serde(default)]
    pub html: bool,
}

fn default_source() -> String {
    "embedded".to_string()
}

fn default_directory() -> String {
    "i18n".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("locale.source", default_source())?
            .set_default("locale.directory", default_directory())?
            .set_default("render.html", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // ADDRESS_FORMAT__LOCALE__SOURCE, ADDRESS_FORMAT__LOCALE__DEFAULT, ...
            .add_source(
                Environment::with_prefix("ADDRESS_FORMAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            directory: default_directory(),
            default: None,
        }
    }
}
