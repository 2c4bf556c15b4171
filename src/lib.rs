// Shared components
pub mod config;
pub mod error;

// Domain layer
pub mod address;
pub mod locale;

pub use address::{AddressFormatter, AttributeStore, Field, LineBreak};
pub use error::{FormatError, FormatResult};
pub use locale::{LocaleRecord, LocaleSource};
