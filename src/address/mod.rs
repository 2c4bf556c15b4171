//! Postal address formatting.
//!
//! This module provides:
//! - The closed set of address fields and their template tokens
//! - A fixed-schema attribute store
//! - The substitution engine expanding `%<token>` and `%n` markers
//! - `AddressFormatter`, tying a locale source to the attribute store
//!
//! # Example
//!
//! ```ignore
//! let mut formatter = AddressFormatter::new();
//! formatter.set_locale("US")?;
//!
//! formatter.set_attribute("RECIPIENT", "Jane Doe")?;
//! formatter.set_attribute("ADDRESS_LINE_1", "123 Main St")?;
//! formatter.set(Field::Locality, "Springfield");
//!
//! let plain = formatter.format_address(false)?;
//! let html = formatter.format_address(true)?;
//! ```

mod attributes;
mod field;
mod formatter;
mod render;

pub use attributes::AttributeStore;
pub use field::{Field, TOKENS};
pub use formatter::AddressFormatter;
pub use render::{render_template, LineBreak};
