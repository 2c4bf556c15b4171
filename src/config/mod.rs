mod settings;

pub use settings::{LocaleConfig, RenderConfig, Settings};
