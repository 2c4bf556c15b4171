//! Fixed-schema storage for address attribute values

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Current value of every address field.
///
/// Each field always has a value; unset fields hold the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct AttributeStore {
    pub admin_area: String,
    pub locality: String,
    pub recipient: String,
    pub organization: String,
    #[serde(rename = "ADDRESS_LINE_1")]
    pub address_line_1: String,
    #[serde(rename = "ADDRESS_LINE_2")]
    pub address_line_2: String,
    pub dependent_locality: String,
    pub postal_code: String,
    pub sorting_code: String,
    pub street_address: String,
    pub country: String,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::AdminArea => &self.admin_area,
            Field::Locality => &self.locality,
            Field::Recipient => &self.recipient,
            Field::Organization => &self.organization,
            Field::AddressLine1 => &self.address_line_1,
            Field::AddressLine2 => &self.address_line_2,
            Field::DependentLocality => &self.dependent_locality,
            Field::PostalCode => &self.postal_code,
            Field::SortingCode => &self.sorting_code,
            Field::StreetAddress => &self.street_address,
            Field::Country => &self.country,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::AdminArea => &mut self.admin_area,
            Field::Locality => &mut self.locality,
            Field::Recipient => &mut self.recipient,
            Field::Organization => &mut self.organization,
            Field::AddressLine1 => &mut self.address_line_1,
            Field::AddressLine2 => &mut self.address_line_2,
            Field::DependentLocality => &mut self.dependent_locality,
            Field::PostalCode => &mut self.postal_code,
            Field::SortingCode => &mut self.sorting_code,
            Field::StreetAddress => &mut self.street_address,
            Field::Country => &mut self.country,
        }
    }

    /// Store `value` verbatim and return the stored value
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &str {
        let slot = self.slot_mut(field);
        *slot = value.into();
        slot
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.slot_mut(field).clear();
        }
    }

    /// True when no field holds a value
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }

    /// Iterate over `(field, value)` pairs in token table order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
